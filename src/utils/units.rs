//! Pitch conversions.

#[allow(unused_imports)]
use num_traits::float::Float;

/// MIDI note number of A4.
pub const A4_NOTE: f32 = 69.0;

/// Frequency of A4 in Hz.
pub const A4_FREQUENCY: f32 = 440.0;

#[inline]
pub fn semitones_to_ratio(semitones: f32) -> f32 {
    2.0_f32.powf(semitones / 12.0)
}

/// Equal-tempered frequency in Hz of a (possibly fractional) MIDI note.
///
/// Notes are clamped to the MIDI range.
#[inline]
pub fn note_to_frequency(midi_note: f32) -> f32 {
    let midi_note = if midi_note.is_finite() {
        midi_note.clamp(0.0, 127.0)
    } else {
        A4_NOTE
    };

    A4_FREQUENCY * semitones_to_ratio(midi_note - A4_NOTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_is_440_hz() {
        assert_eq!(note_to_frequency(69.0), 440.0);
    }

    #[test]
    fn octaves_double() {
        assert!((note_to_frequency(81.0) - 880.0).abs() < 1e-3);
        assert!((note_to_frequency(57.0) - 220.0).abs() < 1e-3);
    }
}
