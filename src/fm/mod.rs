//! Modules for the 2-operator FM/PM core.

pub mod algorithms;
pub mod operator;

/// Number of operators in a voice.
pub const NUM_OPERATORS: usize = 2;

/// Index of the carrier, the operator heard at the output.
pub const CARRIER: usize = 0;

/// Index of the modulator, the only operator with feedback.
pub const MODULATOR: usize = 1;

/// Share of the modulator level controlled by the modulation input.
///
/// A modulation input of -1.0..1.0 scales the modulator by 0.0..1.0, with
/// 0.0 leaving it at half depth.
pub const MAX_MODULATION_DEPTH: f32 = 0.5;
