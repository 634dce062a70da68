//! Parameter slots exposed to the host.
//!
//! The host addresses parameters by a raw slot index and sends raw integer
//! values: `0..=100` for percent style slots, `0..=1023` for the two 10-bit
//! knob slots, small integers for selections.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

/// Number of parameter slots.
pub const NUM_PARAMETERS: usize = 8;

/// Full scale of the feedback parameter.
pub const MAX_FEEDBACK_PARAM: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// Carrier waveform, `0..=3`.
    CarrierWaveform = 0,

    /// Modulator waveform, `0..=3`.
    ModulatorWaveform = 1,

    /// Modulator feedback, `0..=100`.
    Feedback = 2,

    /// 0 for FM, 1 for PM.
    Mode = 3,

    Reserved1 = 4,
    Reserved2 = 5,

    /// Modulator ratio, 10-bit (shape knob).
    Shape = 6,

    /// Modulator level, 10-bit (shift + shape knob).
    ShiftShape = 7,
}

impl Parameter {
    pub const ALL: [Parameter; NUM_PARAMETERS] = [
        Parameter::CarrierWaveform,
        Parameter::ModulatorWaveform,
        Parameter::Feedback,
        Parameter::Mode,
        Parameter::Reserved1,
        Parameter::Reserved2,
        Parameter::Shape,
        Parameter::ShiftShape,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Slot index outside of the known parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownParameter(pub u16);

impl fmt::Display for UnknownParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown parameter slot {}", self.0)
    }
}

impl TryFrom<u16> for Parameter {
    type Error = UnknownParameter;

    fn try_from(index: u16) -> Result<Self, Self::Error> {
        Parameter::ALL
            .get(index as usize)
            .copied()
            .ok_or(UnknownParameter(index))
    }
}

const PENDING: u32 = 1 << 31;

/// Parameter mailbox for hosts sending changes from another thread.
///
/// Each slot holds at most one pending value; a newer post replaces an
/// unread one. One thread posts, the audio thread drains with
/// [`SharedParameters::take`] between blocks.
#[derive(Debug)]
pub struct SharedParameters {
    slots: [AtomicU32; NUM_PARAMETERS],
}

impl Default for SharedParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedParameters {
    pub const fn new() -> Self {
        Self {
            slots: [const { AtomicU32::new(0) }; NUM_PARAMETERS],
        }
    }

    /// Posts a new value for `parameter`.
    #[inline]
    pub fn post(&self, parameter: Parameter, value: u16) {
        self.slots[parameter.index()].store(PENDING | value as u32, Ordering::Release);
    }

    /// Takes the pending value of `parameter`, if any.
    #[inline]
    pub fn take(&self, parameter: Parameter) -> Option<u16> {
        let slot = self.slots[parameter.index()].swap(0, Ordering::Acquire);

        if slot & PENDING != 0 {
            Some(slot as u16)
        } else {
            None
        }
    }

    /// Returns whether any slot has a pending value.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.load(Ordering::Relaxed) & PENDING != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_indices_round_trip() {
        for parameter in Parameter::ALL {
            assert_eq!(Parameter::try_from(parameter.index() as u16), Ok(parameter));
        }
    }

    #[test]
    fn unknown_slots_are_rejected() {
        assert_eq!(Parameter::try_from(8), Err(UnknownParameter(8)));
        assert_eq!(
            UnknownParameter(42).to_string(),
            "unknown parameter slot 42"
        );
    }

    #[test]
    fn mailbox_delivers_latest_value_once() {
        let shared = SharedParameters::new();
        assert!(!shared.is_pending());

        shared.post(Parameter::Shape, 100);
        shared.post(Parameter::Shape, 1023);
        assert!(shared.is_pending());

        assert_eq!(shared.take(Parameter::Shape), Some(1023));
        assert_eq!(shared.take(Parameter::Shape), None);
        assert_eq!(shared.take(Parameter::Mode), None);
    }

    #[test]
    fn mailbox_carries_zero() {
        let shared = SharedParameters::new();
        shared.post(Parameter::Mode, 0);
        assert_eq!(shared.take(Parameter::Mode), Some(0));
    }
}
