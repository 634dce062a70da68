//! FM and PM algorithms and how to render them.
//!
//! Both algorithms run the same chain: the modulator, optionally fed back on
//! itself, is scaled by its level and by the modulation depth, then bends
//! the carrier. They only differ in where the feedback and modulator terms
//! enter the angle:
//!
//! | mode | modulator angle            | carrier angle                  |
//! |------|----------------------------|--------------------------------|
//! | FM   | `2*pi * (phase + fb)`      | `2*pi * (phase + modulator)`   |
//! | PM   | `2*pi * phase + fb`        | `2*pi * phase + modulator`     |
//!
//! In FM the terms are added in cycles, in PM in radians, so the same
//! modulator output is 2*pi times stronger in FM.

use core::f32::consts::TAU;

use super::operator::Operator;
use super::{CARRIER, MAX_MODULATION_DEPTH, MODULATOR, NUM_OPERATORS};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ModulationMode {
    /// Frequency modulation.
    #[default]
    Fm,

    /// Phase modulation.
    Pm,

    /// Fallback for unknown selections; renders nothing and keeps all state.
    Silence,
}

impl<T> From<T> for ModulationMode
where
    T: Into<u32>,
{
    fn from(value: T) -> Self {
        match value.into() {
            0 => ModulationMode::Fm,
            1 => ModulationMode::Pm,
            _ => ModulationMode::Silence,
        }
    }
}

impl ModulationMode {
    /// Angle in radians for an operator at `phase` offset by `offset`.
    #[inline]
    fn angle(self, phase: f32, offset: f32) -> f32 {
        match self {
            ModulationMode::Fm => TAU * (phase + offset),
            ModulationMode::Pm => TAU * phase + offset,
            ModulationMode::Silence => 0.0,
        }
    }
}

/// Scale applied to the modulator for a modulation input in `-1.0..=1.0`.
#[inline]
pub fn modulation_depth(modulation: f32) -> f32 {
    (1.0 - MAX_MODULATION_DEPTH) + MAX_MODULATION_DEPTH * modulation
}

/// Renders one sample of the operator chain.
///
/// Updates `last_output` of both operators and returns the carrier output.
/// Phases are left untouched.
#[inline]
pub fn modulate(
    ops: &mut [Operator; NUM_OPERATORS],
    mode: ModulationMode,
    modulation: f32,
) -> f32 {
    if mode == ModulationMode::Silence {
        return 0.0;
    }

    let depth = modulation_depth(modulation);

    let modulator = &mut ops[MODULATOR];
    let feedback = modulator.feedback * modulator.last_output;
    let angle = mode.angle(modulator.phase, feedback);
    modulator.last_output = modulator.level * depth * modulator.render(angle);
    let modulator_output = modulator.last_output;

    let carrier = &mut ops[CARRIER];
    let angle = mode.angle(carrier.phase, modulator_output);
    carrier.last_output = carrier.level * carrier.render(angle);

    carrier.last_output
}
