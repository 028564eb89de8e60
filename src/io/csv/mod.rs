//! CSV output for crosswalk tables.

mod write;

pub use write::*;
