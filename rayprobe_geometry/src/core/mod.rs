//! Crate-wide definitions: numeric types, log targets and the macros that generate them

pub mod macros;
pub mod targets;
pub mod types;
