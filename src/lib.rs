#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod fm;
pub mod oscillator;
pub mod parameters;
pub mod resources;
pub mod utils;
pub mod voice;

/// Sample rate the voice runs at unless the host asks for something else.
pub const DEFAULT_SAMPLE_RATE: f32 = 48000.0;

/// Sample rate context for DSP calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRate {
    /// Sample rate in Hz
    pub sample_rate_hz: f32,
    /// Reciprocal of sample rate (1.0 / sample_rate_hz) for fast multiplication
    pub inv_sr: f32,
}

impl SampleRate {
    /// Create a new sample rate context.
    ///
    /// Non-finite or non-positive rates fall back to [`DEFAULT_SAMPLE_RATE`].
    pub fn new(sample_rate_hz: f32) -> Self {
        let sample_rate_hz = if sample_rate_hz.is_finite() && sample_rate_hz > 0.0 {
            sample_rate_hz
        } else {
            DEFAULT_SAMPLE_RATE
        };

        Self {
            sample_rate_hz,
            inv_sr: 1.0 / sample_rate_hz,
        }
    }

    /// Converts a frequency in Hz to a phase increment in cycles per sample.
    #[inline]
    pub fn normalize(&self, frequency_hz: f32) -> f32 {
        frequency_hz * self.inv_sr
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}
