//! Fast pseudo random number generator.
//!
//! A linear congruential generator, used to scatter operator start phases so
//! several voices never start phase-locked.

// Based on MIT-licensed code (c) 2012 by Olivier Gillet (ol.gillet@gmail.com)

use core::sync::atomic::{AtomicU32, Ordering};

static RNG_STATE: AtomicU32 = AtomicU32::new(0x21);

/// Reseeds the process-wide generator used by [`next_seed`].
#[inline]
pub fn seed(seed: u32) {
    RNG_STATE.store(seed, Ordering::Relaxed);
}

/// Draws a seed from the process-wide generator.
///
/// Each call advances the shared state, so voices created one after the
/// other get different seeds.
#[inline]
pub fn next_seed() -> u32 {
    let mut state = RNG_STATE.load(Ordering::Relaxed);

    loop {
        let next = lcg(state);
        match RNG_STATE.compare_exchange_weak(state, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(current) => state = current,
        }
    }
}

#[inline]
fn lcg(state: u32) -> u32 {
    state.wrapping_mul(1664525).wrapping_add(1013904223)
}

/// Generator owned by a single voice.
#[derive(Debug, Clone)]
pub struct Random {
    state: u32,
}

impl Random {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub fn get_word(&mut self) -> u32 {
        self.state = lcg(self.state);
        self.state
    }

    /// Returns a value in `0.0..1.0`.
    ///
    /// Only the top 24 bits are used so the result is exact in `f32` and can
    /// never round up to `1.0`.
    #[inline]
    pub fn get_float(&mut self) -> f32 {
        (self.get_word() >> 8) as f32 / 16777216.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_stay_below_one() {
        let mut random = Random::new(0xFFFF_FFFF);
        for _ in 0..100_000 {
            let x = random.get_float();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Random::new(1234);
        let mut b = Random::new(1234);
        for _ in 0..64 {
            assert_eq!(a.get_word(), b.get_word());
        }
    }

    #[test]
    fn shared_generator_hands_out_distinct_seeds() {
        assert_ne!(next_seed(), next_seed());
    }
}
