//! Overlap Engine
//!
//! This crate finds the pair of employees who spent the most days working
//! together. Work periods are grouped by project, the date ranges of every
//! two employees on a project are intersected, and the shared days are summed
//! per pair across all projects.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod report;
