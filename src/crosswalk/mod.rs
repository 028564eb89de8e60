//! Dominant-geography assignment between two feature collections.
//!
//! For each source feature, targets are pruned by bounding box, points are
//! rejection-sampled inside the source from an identifier-seeded generator, and
//! each sample votes (weighted by `cos(lat)`) for the first candidate containing
//! it. When no sample votes, the source centroid decides.

mod assign;
mod candidates;
mod config;
mod sample;

pub use assign::{assign, assign_detailed, assign_one, assign_with, resolution_counts, Assignment, Resolution};
pub use candidates::candidates;
pub use config::{CrosswalkConfig, DEFAULT_ATTEMPT_FACTOR, DEFAULT_SAMPLES};
