//! Single voice with MIDI parameter control.

use audio_midi_shell::{AudioGenerator, AudioMidiShell};
use simple_logger::SimpleLogger;

use op_two_dsp::parameters::Parameter;
use op_two_dsp::utils::{f32_to_q31, q31_to_f32, PARAM_MAX_VALUE};
use op_two_dsp::voice::{RenderParameters, Voice};

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZE: usize = 32;

fn main() -> ! {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    AudioMidiShell::run_forever(SAMPLE_RATE, BLOCK_SIZE, App::new());
}

#[derive(Debug)]
struct App {
    voice: Voice,
    parameters: RenderParameters,
    buffer: Vec<i32>,
    gate: bool,
    volume: f32,
}

impl App {
    pub fn new() -> Self {
        Self {
            voice: Voice::new(SAMPLE_RATE as f32),
            parameters: RenderParameters::default(),
            buffer: Vec::new(),
            gate: false,
            volume: 0.5,
        }
    }

    fn set_parameter(&mut self, parameter: Parameter, value: u16) {
        self.voice.set_parameter(parameter as u16, value);
        log::info!("{parameter:?}: {value}");
    }
}

impl AudioGenerator for App {
    fn init(&mut self, block_size: usize) {
        self.buffer = vec![0; block_size];
        self.parameters.pitch = 60 << 8;
        self.voice.init();
    }

    fn process(&mut self, samples_left: &mut [f32], samples_right: &mut [f32]) {
        let frames = samples_left.len().min(self.buffer.len());
        let out = &mut self.buffer[..frames];

        self.voice.render(&self.parameters, out);

        let gain = if self.gate { self.volume } else { 0.0 };

        for (frame, sample) in out.iter().enumerate() {
            let sample = q31_to_f32(*sample) * gain;
            samples_left[frame] = sample;
            samples_right[frame] = sample;
        }
    }

    fn process_midi(&mut self, message: Vec<u8>) {
        match message[0] & 0xF0 {
            0x80 => {
                // Note off
                self.voice.note_off();
                self.gate = false;
                log::info!("Note off: {}", message[1]);
            }
            0x90 if message[2] != 0 => {
                // Note on
                self.parameters.pitch = (message[1] as u16) << 8;
                self.voice.note_on();
                self.gate = true;
                log::info!("Note on: {}", message[1]);
            }
            0xB0 => {
                // Control change
                let value = message[2] as u32;
                match message[1] {
                    1 => {
                        let modulation = value as f32 / 63.5 - 1.0;
                        self.parameters.shape_lfo = f32_to_q31(modulation);
                        log::info!("Modulation: {modulation}");
                    }
                    21 => self.set_parameter(Parameter::CarrierWaveform, (value * 3 / 127) as u16),
                    22 => {
                        self.set_parameter(Parameter::ModulatorWaveform, (value * 3 / 127) as u16)
                    }
                    23 => self.set_parameter(Parameter::Feedback, (value * 100 / 127) as u16),
                    24 => self.set_parameter(Parameter::Mode, (value / 64) as u16),
                    25 => self.set_parameter(
                        Parameter::Shape,
                        (value * PARAM_MAX_VALUE as u32 / 127) as u16,
                    ),
                    26 => self.set_parameter(
                        Parameter::ShiftShape,
                        (value * PARAM_MAX_VALUE as u32 / 127) as u16,
                    ),
                    28 => {
                        self.volume = value as f32 / 127.0;
                        log::info!("Volume: {}", self.volume);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}
