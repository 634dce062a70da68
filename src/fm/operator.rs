//! FM Operator.

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::oscillator::waveform::{generate, Waveform};

#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    pub waveform: Waveform,

    /// Frequency relative to the note.
    pub ratio: f32,

    /// Output level in `0.0..=1.0`.
    pub level: f32,

    /// Position in the cycle, always in `0.0..1.0`.
    pub phase: f32,

    /// Self-modulation amount in `0.0..=1.0`.
    pub feedback: f32,

    /// Output of the previous sample.
    pub last_output: f32,
}

impl Default for Operator {
    fn default() -> Self {
        Self {
            waveform: Waveform::Sine,
            ratio: 1.0,
            level: 1.0,
            phase: 0.0,
            feedback: 0.0,
            last_output: 0.0,
        }
    }
}

impl Operator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, phase: f32) {
        *self = Self {
            phase,
            ..Self::default()
        };
    }

    /// Clears the feedback memory. Phase and settings are kept.
    #[inline]
    pub fn reset(&mut self) {
        self.last_output = 0.0;
    }

    #[inline]
    pub fn render(&self, angle: f32) -> f32 {
        generate(angle, self.waveform)
    }

    /// Steps the phase by one sample.
    ///
    /// `frequency` is the note frequency in cycles per sample; the operator
    /// applies its own ratio.
    #[inline]
    pub fn advance(&mut self, frequency: f32) {
        let mut phase = self.phase + frequency * self.ratio;
        phase -= phase.floor();

        // Tiny negative steps round up to exactly 1.0.
        if !(0.0..1.0).contains(&phase) {
            phase = 0.0;
        }

        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_large_increments() {
        let mut op = Operator::new();
        op.ratio = 3.0;
        op.advance(1.75);
        assert!((op.phase - 0.25).abs() < 1e-6);
    }

    #[test]
    fn advance_recovers_from_non_finite_steps() {
        let mut op = Operator::new();
        op.advance(f32::NAN);
        assert_eq!(op.phase, 0.0);
        op.advance(f32::INFINITY);
        assert_eq!(op.phase, 0.0);
    }

    #[test]
    fn tiny_negative_step_stays_in_range() {
        let mut op = Operator::new();
        op.advance(-1e-12);
        assert!((0.0..1.0).contains(&op.phase));
    }

    #[test]
    fn reset_keeps_phase() {
        let mut op = Operator::new();
        op.init(0.5);
        op.last_output = 0.7;
        op.reset();
        assert_eq!(op.phase, 0.5);
        assert_eq!(op.last_output, 0.0);
    }
}
