//! Single-cycle sine table.
//!
//! Built once on first use and shared by every voice. The extra guard entry
//! at the end repeats the first one so interpolation never wraps inside the
//! hot loop.

#[allow(unused_imports)]
use num_traits::float::Float;
use spin::Once;

pub const LUT_SINE_BITS: u32 = 10;
pub const LUT_SINE_SIZE: usize = 1 << LUT_SINE_BITS;

static LUT_SINE: Once<[f32; LUT_SINE_SIZE + 1]> = Once::new();

/// Returns the sine table, building it if needed.
#[inline]
pub fn lut_sine() -> &'static [f32; LUT_SINE_SIZE + 1] {
    LUT_SINE.call_once(|| {
        let mut table = [0.0; LUT_SINE_SIZE + 1];

        for (i, value) in table.iter_mut().enumerate() {
            let phase = i as f64 / LUT_SINE_SIZE as f64;
            *value = (phase * core::f64::consts::TAU).sin() as f32;
        }

        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_point_closes_the_cycle() {
        let table = lut_sine();
        assert_eq!(table[0], 0.0);
        assert!((table[LUT_SINE_SIZE] - table[0]).abs() < 1e-6);
        assert!((table[LUT_SINE_SIZE / 4] - 1.0).abs() < 1e-6);
        assert!((table[3 * LUT_SINE_SIZE / 4] + 1.0).abs() < 1e-6);
    }
}
