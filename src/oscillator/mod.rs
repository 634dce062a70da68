//! Waveform generation.

pub mod waveform;
