//! Accumulated overlap totals.
//!
//! [`OverlapTotals`] maps each [`EmployeePair`] to the number of days the two
//! employees worked together, summed over every project they share.
//! [`PairOverlap`] is a single entry of that mapping, used for the selected
//! maximum and for export.

use std::collections::HashMap;

use serde::Serialize;

use super::EmployeePair;

/// One pair together with its accumulated overlap in days.
///
/// # Example
///
/// ```
/// use overlap_engine::models::{EmployeePair, PairOverlap};
///
/// let entry = PairOverlap {
///     pair: EmployeePair::new(1, 2).unwrap(),
///     days: 30,
/// };
/// assert_eq!(entry.to_string(), "1, 2, 30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PairOverlap {
    /// The canonical pair of employees.
    pub pair: EmployeePair,
    /// Total overlapping days.
    pub days: u64,
}

impl std::fmt::Display for PairOverlap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.pair, self.days)
    }
}

/// Mapping from employee pair to accumulated overlap days.
///
/// Iteration order is unspecified. Only the final value per key is meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlapTotals {
    totals: HashMap<EmployeePair, u64>,
}

impl OverlapTotals {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `days` to the running total of `pair`, creating the entry if absent.
    pub fn add(&mut self, pair: EmployeePair, days: u64) {
        *self.totals.entry(pair).or_insert(0) += days;
    }

    /// Returns the accumulated days for `pair`, if the pair ever overlapped.
    pub fn get(&self, pair: &EmployeePair) -> Option<u64> {
        self.totals.get(pair).copied()
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Returns true if no pair overlapped.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Iterates over every pair and its total.
    pub fn iter(&self) -> impl Iterator<Item = PairOverlap> + '_ {
        self.totals
            .iter()
            .map(|(pair, days)| PairOverlap { pair: *pair, days: *days })
    }

    /// Returns the underlying map.
    pub fn as_map(&self) -> &HashMap<EmployeePair, u64> {
        &self.totals
    }

    /// Combines two partial results by summing values key by key.
    ///
    /// The operation is associative and commutative, so partial totals built
    /// on separate workers can be merged in any order.
    pub fn merge(mut self, other: OverlapTotals) -> OverlapTotals {
        // Fold the smaller map into the larger one.
        let (mut into, from) = if self.totals.len() >= other.totals.len() {
            (std::mem::take(&mut self.totals), other.totals)
        } else {
            (other.totals, std::mem::take(&mut self.totals))
        };
        for (pair, days) in from {
            *into.entry(pair).or_insert(0) += days;
        }
        OverlapTotals { totals: into }
    }
}

impl FromIterator<PairOverlap> for OverlapTotals {
    fn from_iter<I: IntoIterator<Item = PairOverlap>>(iter: I) -> Self {
        let mut totals = OverlapTotals::new();
        for entry in iter {
            totals.add(entry.pair, entry.days);
        }
        totals
    }
}
