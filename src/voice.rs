//! Single two-operator voice with host callbacks and parameter processing.

use crate::fm::algorithms::{modulate, ModulationMode};
use crate::fm::operator::Operator;
use crate::fm::{CARRIER, MODULATOR, NUM_OPERATORS};
use crate::oscillator::waveform::Waveform;
use crate::parameters::{Parameter, SharedParameters, MAX_FEEDBACK_PARAM};
use crate::resources::ratio::ratio_from_param;
use crate::resources::sine::lut_sine;
use crate::utils::random::{self, Random};
use crate::utils::units::note_to_frequency;
use crate::utils::{f32_to_q31, param_val_to_f32, q31_to_f32};
use crate::SampleRate;

/// Per-block input from the host.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderParameters {
    /// MIDI note in the upper byte, fine pitch in the lower byte.
    pub pitch: u16,

    /// Modulation input (usually an LFO) in Q31, full scale -1.0..1.0.
    pub shape_lfo: i32,
}

impl RenderParameters {
    /// MIDI note number encoded in `pitch`.
    #[inline]
    pub fn note(&self) -> u8 {
        (self.pitch >> 8) as u8
    }
}

#[derive(Debug, Clone)]
pub struct Voice {
    operators: [Operator; NUM_OPERATORS],
    mode: ModulationMode,
    sample_rate: SampleRate,
    random: Random,
}

impl Voice {
    /// Creates a voice with start phases seeded from the shared generator.
    pub fn new(sample_rate_hz: f32) -> Self {
        Self::with_seed(sample_rate_hz, random::next_seed())
    }

    /// Creates a voice with reproducible start phases.
    pub fn with_seed(sample_rate_hz: f32, seed: u32) -> Self {
        // Build the sine table now rather than in the first audio callback.
        lut_sine();

        let mut voice = Self {
            operators: [Operator::new(), Operator::new()],
            mode: ModulationMode::Fm,
            sample_rate: SampleRate::new(sample_rate_hz),
            random: Random::new(seed),
        };
        voice.init();

        voice
    }

    /// Restores the default patch and scatters the operator phases.
    pub fn init(&mut self) {
        self.mode = ModulationMode::Fm;

        for op in self.operators.iter_mut() {
            op.init(self.random.get_float());
        }
    }

    /// Renders one block into Q31 samples.
    pub fn render(&mut self, parameters: &RenderParameters, out: &mut [i32]) {
        let frequency = note_to_frequency(parameters.note() as f32);
        let modulation = q31_to_f32(parameters.shape_lfo);

        for out_sample in out.iter_mut() {
            *out_sample = f32_to_q31(self.next(frequency, modulation));
        }
    }

    /// Renders one block into float samples.
    pub fn render_f32(&mut self, frequency_hz: f32, modulation: f32, out: &mut [f32]) {
        for out_sample in out.iter_mut() {
            *out_sample = self.next(frequency_hz, modulation);
        }
    }

    /// Renders one sample and moves the phases on.
    #[inline]
    pub fn next(&mut self, frequency_hz: f32, modulation: f32) -> f32 {
        let sample = self.step(modulation);
        self.advance(frequency_hz);

        sample
    }

    /// Runs the operator chain for the current phases.
    ///
    /// `modulation` is clamped to `-1.0..=1.0`; non-finite values count as 0.0.
    #[inline]
    pub fn step(&mut self, modulation: f32) -> f32 {
        let modulation = if modulation.is_finite() {
            modulation.clamp(-1.0, 1.0)
        } else {
            0.0
        };

        modulate(&mut self.operators, self.mode, modulation)
    }

    /// Advances every operator by one sample of `frequency_hz`.
    #[inline]
    pub fn advance(&mut self, frequency_hz: f32) {
        let frequency = self.sample_rate.normalize(frequency_hz);

        for op in self.operators.iter_mut() {
            op.advance(frequency);
        }
    }

    /// Phases and feedback keep running across notes.
    pub fn note_on(&mut self) {}

    pub fn note_off(&mut self) {
        for op in self.operators.iter_mut() {
            op.reset();
        }
    }

    /// Applies a raw parameter change from the host.
    ///
    /// Unknown slots are ignored.
    pub fn set_parameter(&mut self, index: u16, value: u16) {
        match Parameter::try_from(index) {
            Ok(parameter) => self.apply(parameter, value),
            Err(err) => log::debug!("Ignoring {err}"),
        }
    }

    /// Applies every change pending in `shared`.
    pub fn apply_shared(&mut self, shared: &SharedParameters) {
        for parameter in Parameter::ALL {
            if let Some(value) = shared.take(parameter) {
                self.apply(parameter, value);
            }
        }
    }

    pub fn apply(&mut self, parameter: Parameter, value: u16) {
        log::trace!("{parameter:?}: {value}");

        match parameter {
            Parameter::CarrierWaveform => self.set_carrier_waveform(Waveform::from(value)),
            Parameter::ModulatorWaveform => self.set_modulator_waveform(Waveform::from(value)),
            Parameter::Feedback => self.set_feedback(value),
            Parameter::Mode => self.set_mode(ModulationMode::from(value)),
            Parameter::Reserved1 | Parameter::Reserved2 => {}
            Parameter::Shape => self.set_ratio(value),
            Parameter::ShiftShape => self.set_level(value),
        }
    }

    pub fn set_carrier_waveform(&mut self, waveform: Waveform) {
        self.operators[CARRIER].waveform = waveform;
    }

    pub fn set_modulator_waveform(&mut self, waveform: Waveform) {
        self.operators[MODULATOR].waveform = waveform;
    }

    /// Sets the modulator feedback from a `0..=100` percentage.
    pub fn set_feedback(&mut self, value: u16) {
        self.operators[MODULATOR].feedback =
            u16::min(value, MAX_FEEDBACK_PARAM) as f32 / MAX_FEEDBACK_PARAM as f32;
    }

    pub fn set_mode(&mut self, mode: ModulationMode) {
        self.mode = mode;
    }

    /// Sets the modulator ratio from a 10-bit value.
    pub fn set_ratio(&mut self, value: u16) {
        self.operators[MODULATOR].ratio = ratio_from_param(value);
    }

    /// Sets the modulator level from a 10-bit value.
    pub fn set_level(&mut self, value: u16) {
        self.operators[MODULATOR].level = param_val_to_f32(value);
    }

    #[inline]
    pub fn operator(&self, index: usize) -> Option<&Operator> {
        self.operators.get(index)
    }

    #[inline]
    pub fn operators(&self) -> &[Operator; NUM_OPERATORS] {
        &self.operators
    }

    #[inline]
    pub fn mode(&self) -> ModulationMode {
        self.mode
    }

    #[inline]
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }
}
