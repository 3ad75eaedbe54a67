//! Core data models for the Overlap Engine.
//!
//! This module contains the value types flowing through the engine: the input
//! work periods, the canonical employee pair used as a key, and the
//! accumulated totals it produces.

mod employee_pair;
mod overlap_totals;
mod work_period;

pub use employee_pair::EmployeePair;
pub use overlap_totals::{OverlapTotals, PairOverlap};
pub use work_period::{EmployeeId, ProjectId, WorkPeriod};
