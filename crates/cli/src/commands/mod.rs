//! Command implementations.
//!
//! Every command writes its human-readable output to the `out` writer it is
//! handed, so tests can capture what a user would see.

pub mod cart;
pub mod catalogue;
pub mod effects;
pub mod theme;
