//! Overlap computation for the Overlap Engine.
//!
//! This module groups work periods by project, intersects the date ranges of
//! every pair of employees within a project, accumulates the shared days per
//! employee pair across projects, and selects the pair with the largest total.
//! None of these functions perform I/O or return errors.

mod accumulation;
mod grouping;
mod max_pair;
mod pair_overlap;

pub use accumulation::{compute_overlaps, compute_overlaps_parallel};
pub use grouping::group_by_project;
pub use max_pair::find_max_pair;
pub use pair_overlap::overlap_days;
