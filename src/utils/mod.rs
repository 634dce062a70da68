//! Utility functions.
//!
//! Conversions at the boundary between the host's fixed-point world and the
//! floating point core, plus small numeric helpers shared by the oscillator
//! code.

pub mod random;
pub mod units;

#[allow(unused_imports)]
use num_traits::float::Float;

/// Full scale of a 10-bit knob parameter.
pub const PARAM_MAX_VALUE: u16 = 1023;

const Q31_SCALE: f32 = 2147483648.0;

/// Linear interpolation in a table covering one cycle, `phase` in `0.0..=1.0`.
///
/// The table must hold `size + 1` entries. The integral index is masked so a
/// phase of exactly `1.0` can never read past the end.
#[inline]
pub fn interpolate_cycle(table: &[f32], phase: f32, size: usize) -> f32 {
    let index = phase.clamp(0.0, 1.0) * size as f32;
    let index_integral = index as usize;
    let index_fractional = index - (index_integral as f32);
    let index_integral = index_integral & (size - 1);
    let a = table[index_integral];
    let b = table[index_integral + 1];

    a + (b - a) * index_fractional
}

/// Wraps `x` into `0.0..period` with a Euclidean remainder.
///
/// Far from zero the remainder loses all precision; such inputs, and
/// non-finite ones, wrap to `0.0`.
#[inline]
pub fn wrap(x: f32, period: f32) -> f32 {
    let mut wrapped = x - period * (x / period).floor();

    if wrapped < 0.0 {
        wrapped += period;
    }
    if wrapped >= period {
        wrapped -= period;
    }
    if !(0.0..period).contains(&wrapped) {
        wrapped = 0.0;
    }

    wrapped
}

/// Converts a float sample to Q31, clamping to the -1.0..1.0 range.
///
/// NaN converts to silence.
#[inline]
pub fn f32_to_q31(x: f32) -> i32 {
    // Saturating cast: +1.0 lands on i32::MAX, -1.0 on i32::MIN.
    (x.clamp(-1.0, 1.0) * Q31_SCALE) as i32
}

/// Converts a Q31 value to a float in `-1.0..1.0`.
#[inline]
pub fn q31_to_f32(x: i32) -> f32 {
    x as f32 / Q31_SCALE
}

/// Normalizes a 10-bit knob value to `0.0..=1.0`.
#[inline]
pub fn param_val_to_f32(value: u16) -> f32 {
    u16::min(value, PARAM_MAX_VALUE) as f32 / PARAM_MAX_VALUE as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q31_full_scale() {
        assert_eq!(f32_to_q31(1.0), i32::MAX);
        assert_eq!(f32_to_q31(-1.0), i32::MIN);
        assert_eq!(f32_to_q31(0.0), 0);
    }

    #[test]
    fn q31_clamps_out_of_range() {
        assert_eq!(f32_to_q31(3.5), i32::MAX);
        assert_eq!(f32_to_q31(-12.0), i32::MIN);
        assert_eq!(f32_to_q31(f32::INFINITY), i32::MAX);
        assert_eq!(f32_to_q31(f32::NAN), 0);
    }

    #[test]
    fn q31_half_scale() {
        assert_eq!(f32_to_q31(0.5), 1 << 30);
        assert_eq!(f32_to_q31(-0.5), -(1 << 30));
        assert_eq!(q31_to_f32(1 << 30), 0.5);
        assert_eq!(q31_to_f32(i32::MIN), -1.0);
    }

    #[test]
    fn param_values_normalize() {
        assert_eq!(param_val_to_f32(0), 0.0);
        assert_eq!(param_val_to_f32(1023), 1.0);
        assert_eq!(param_val_to_f32(4000), 1.0);
    }

    #[test]
    fn wrap_stays_in_range() {
        let period = core::f32::consts::TAU;
        for x in [-1e-9, -period, -100.0, 0.0, period, 1e6, 12345.678] {
            let w = wrap(x, period);
            assert!((0.0..period).contains(&w), "{x} wrapped to {w}");
        }
    }

    #[test]
    fn wrap_survives_huge_values() {
        let period = core::f32::consts::TAU;
        for x in [1e20, 1e30, -1e30, f32::MAX, f32::MIN, f32::NAN, f32::INFINITY] {
            let w = wrap(x, period);
            assert!((0.0..period).contains(&w), "{x} wrapped to {w}");
        }
    }

    #[test]
    fn interpolate_cycle_clamps_phase() {
        let table = [0.0, 1.0, 0.0, -1.0, 0.0];
        assert_eq!(interpolate_cycle(&table, 1e30, 4), 0.0);
        assert_eq!(interpolate_cycle(&table, -5.0, 4), 0.0);
        assert_eq!(interpolate_cycle(&table, 0.25, 4), 1.0);
    }
}
