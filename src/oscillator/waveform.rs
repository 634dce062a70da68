//! Naive (non band-limited) waveform shapes evaluated from a phase angle.
//!
//! All shapes take an angle in radians, are periodic in 2*pi and return a
//! value in -1.0..=1.0. Angles outside of one cycle, including negative ones
//! pushed there by feedback, are wrapped first.

use core::f32::consts::{FRAC_PI_2, PI, TAU};

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::resources::sine::{lut_sine, LUT_SINE_SIZE};
use crate::utils::{interpolate_cycle, wrap};

/// Waveform of an operator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    #[default]
    Sine,

    Triangle,
    Square,
    Sawtooth,

    /// Fallback for unknown selections; always outputs 0.0.
    Silence,
}

impl<T> From<T> for Waveform
where
    T: Into<u32>,
{
    fn from(value: T) -> Self {
        match value.into() {
            0 => Waveform::Sine,
            1 => Waveform::Triangle,
            2 => Waveform::Square,
            3 => Waveform::Sawtooth,
            _ => Waveform::Silence,
        }
    }
}

/// Evaluates `waveform` at `angle` radians.
///
/// Non-finite angles produce silence.
#[inline]
pub fn generate(angle: f32, waveform: Waveform) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }

    match waveform {
        Waveform::Sine => sine(angle),
        Waveform::Triangle => triangle(angle),
        Waveform::Square => square(angle),
        Waveform::Sawtooth => sawtooth(angle),
        Waveform::Silence => 0.0,
    }
}

/// Table based sine.
#[inline]
pub fn sine(angle: f32) -> f32 {
    let phase = wrap(angle, TAU) / TAU;

    interpolate_cycle(lut_sine(), phase, LUT_SINE_SIZE)
}

/// Piecewise linear triangle starting at 0.0 and rising.
#[inline]
pub fn triangle(angle: f32) -> f32 {
    let angle = wrap(angle, TAU);
    let ratio_in_quadrant = (angle % FRAC_PI_2) / FRAC_PI_2;

    if angle < FRAC_PI_2 {
        ratio_in_quadrant
    } else if angle < PI {
        1.0 - ratio_in_quadrant
    } else if angle < PI + FRAC_PI_2 {
        -ratio_in_quadrant
    } else {
        -1.0 + ratio_in_quadrant
    }
}

/// Two-level square.
///
/// The level flips whenever `angle / pi` rounds to an odd number, so the
/// steps sit at pi/2 and 3*pi/2.
#[inline]
pub fn square(angle: f32) -> f32 {
    if is_odd_half_cycle(wrap(angle, TAU)) {
        -1.0
    } else {
        1.0
    }
}

/// Ramp restarting every pi radians, shifted down by one on odd half cycles.
#[inline]
pub fn sawtooth(angle: f32) -> f32 {
    let angle = wrap(angle, TAU);
    let ramp = (angle % PI) / PI;

    if is_odd_half_cycle(angle) {
        ramp - 1.0
    } else {
        ramp
    }
}

// `angle` must already be wrapped into one cycle.
#[inline]
fn is_odd_half_cycle(angle: f32) -> bool {
    ((angle / PI).round() as u32) & 1 == 1
}
