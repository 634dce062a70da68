//! Frequency ratios selectable for the modulator.
//!
//! Mixes integer ratios with multiples of sqrt(2), sqrt(3) and pi/2 to reach
//! inharmonic, bell-like spectra.

#![allow(clippy::approx_constant)]

/// Highest valid index into [`LUT_RATIO`].
pub const MAX_LUT_RATIO_INDEX: usize = 63;

pub const LUT_RATIO_SIZE: usize = MAX_LUT_RATIO_INDEX + 1;

pub const LUT_RATIO: [f32; LUT_RATIO_SIZE] = [
    0.5, 0.71, 0.78, 0.87, 1.0, 1.41, 1.57, 1.73, //
    2.0, 2.82, 3.0, 3.14, 3.46, 4.0, 4.24, 4.71, //
    5.0, 5.19, 5.65, 6.0, 6.28, 6.92, 7.0, 7.07, //
    7.85, 8.0, 8.48, 8.65, 9.0, 9.42, 9.89, 10.0, //
    10.38, 10.99, 11.0, 11.3, 12.0, 12.11, 12.56, 12.72, //
    13.0, 13.84, 14.0, 14.1, 14.13, 15.0, 15.55, 15.57, //
    15.7, 16.96, 17.27, 17.3, 18.37, 18.84, 19.03, 19.78, //
    20.41, 20.76, 21.2, 21.98, 22.49, 23.55, 24.22, 25.95, //
];

/// Looks up the ratio for a 10-bit knob value.
///
/// The value is reduced to 7 bits and clamped to the last table entry.
#[inline]
pub fn ratio_from_param(value: u16) -> f32 {
    LUT_RATIO[ratio_index(value)]
}

#[inline]
pub fn ratio_index(value: u16) -> usize {
    usize::min(MAX_LUT_RATIO_INDEX, (value >> 3) as usize)
}
