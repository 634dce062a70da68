//! Lookup tables.

pub mod ratio;
pub mod sine;
