//! Presentation of overlap results.
//!
//! This module contains the [`OverlapReport`] type, which captures everything
//! one run produced (every pair total and the selected best pair) in a form
//! that can be printed as text or exported as JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::calculation::find_max_pair;
use crate::models::{OverlapTotals, PairOverlap};

/// Message printed when no two employees ever overlapped.
pub const NO_OVERLAP_MESSAGE: &str = "No overlapping work periods found.";

/// The result of one overlap run.
///
/// # Example
///
/// ```
/// use overlap_engine::models::{EmployeePair, OverlapTotals};
/// use overlap_engine::report::OverlapReport;
///
/// let mut totals = OverlapTotals::new();
/// totals.add(EmployeePair::new(1, 2).unwrap(), 30);
/// totals.add(EmployeePair::new(1, 3).unwrap(), 15);
///
/// let report = OverlapReport::new(3, &totals);
/// assert_eq!(report.summary_line(), "1, 2, 30");
/// assert_eq!(report.totals[1].days, 15);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct OverlapReport {
    /// Unique identifier of this run.
    pub run_id: Uuid,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Number of work periods that went into the computation.
    pub record_count: usize,
    /// Number of distinct pairs with any overlap.
    pub pair_count: usize,
    /// The pair with the longest overlap, if any.
    pub best: Option<PairOverlap>,
    /// Every pair total, longest first, then by pair.
    pub totals: Vec<PairOverlap>,
}

impl OverlapReport {
    /// Builds a report from finished totals.
    ///
    /// `best` is taken from [`find_max_pair`], so among tied pairs it is not
    /// necessarily the first entry of `totals`.
    pub fn new(record_count: usize, totals: &OverlapTotals) -> Self {
        let mut entries: Vec<PairOverlap> = totals.iter().collect();
        entries.sort_by(|a, b| b.days.cmp(&a.days).then(a.pair.cmp(&b.pair)));

        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            record_count,
            pair_count: entries.len(),
            best: find_max_pair(totals),
            totals: entries,
        }
    }

    /// The best pair as `emp1, emp2, days`, or [`NO_OVERLAP_MESSAGE`].
    pub fn summary_line(&self) -> String {
        match &self.best {
            Some(best) => best.to_string(),
            None => NO_OVERLAP_MESSAGE.to_string(),
        }
    }

    /// Every pair total as `emp1, emp2, days`, one per line.
    ///
    /// Falls back to [`NO_OVERLAP_MESSAGE`] when there are none.
    pub fn all_lines(&self) -> Vec<String> {
        if self.totals.is_empty() {
            return vec![NO_OVERLAP_MESSAGE.to_string()];
        }
        self.totals.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeePair;

    fn pair(a: i64, b: i64) -> EmployeePair {
        EmployeePair::new(a, b).unwrap()
    }

    #[test]
    fn test_empty_totals_report_no_overlap() {
        let report = OverlapReport::new(2, &OverlapTotals::new());

        assert_eq!(report.record_count, 2);
        assert_eq!(report.pair_count, 0);
        assert!(report.best.is_none());
        assert_eq!(report.summary_line(), NO_OVERLAP_MESSAGE);
        assert_eq!(report.all_lines(), vec![NO_OVERLAP_MESSAGE.to_string()]);
    }

    #[test]
    fn test_totals_are_sorted_longest_first_then_by_pair() {
        let mut totals = OverlapTotals::new();
        totals.add(pair(3, 4), 6);
        totals.add(pair(2, 3), 30);
        totals.add(pair(1, 2), 32);
        totals.add(pair(1, 4), 6);

        let report = OverlapReport::new(10, &totals);

        assert_eq!(
            report.all_lines(),
            vec!["1, 2, 32", "2, 3, 30", "1, 4, 6", "3, 4, 6"]
        );
        assert_eq!(report.best, Some(PairOverlap { pair: pair(1, 2), days: 32 }));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut totals = OverlapTotals::new();
        totals.add(pair(1, 2), 30);

        let report = OverlapReport::new(2, &totals);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["record_count"], 2);
        assert_eq!(json["pair_count"], 1);
        assert_eq!(json["best"]["pair"]["first"], 1);
        assert_eq!(json["best"]["pair"]["second"], 2);
        assert_eq!(json["best"]["days"], 30);
        assert_eq!(json["totals"].as_array().unwrap().len(), 1);
        assert!(json["run_id"].is_string());
    }

    #[test]
    fn test_each_report_gets_its_own_run_id() {
        let totals = OverlapTotals::new();
        let first = OverlapReport::new(0, &totals);
        let second = OverlapReport::new(0, &totals);
        assert_ne!(first.run_id, second.run_id);
    }
}
