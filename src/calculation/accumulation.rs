//! Accumulation of pairwise overlaps across projects.
//!
//! Within each project every unordered pair of periods is compared once.
//! Overlaps are summed per canonical employee pair across all projects.
//! Stints are compared record by record, so if two employees have several
//! overlapping stints each overlapping combination is added separately.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::models::{EmployeePair, OverlapTotals, WorkPeriod};

use super::grouping::group_by_project;
use super::pair_overlap::overlap_days;

/// Computes total overlapping days for every pair of employees sharing a project.
///
/// Pairs that never overlap have no entry. Comparisons between two periods
/// of the same employee are skipped.
///
/// # Example
///
/// ```
/// use overlap_engine::calculation::compute_overlaps;
/// use overlap_engine::models::{EmployeePair, WorkPeriod};
/// use chrono::NaiveDate;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let periods = vec![
///     WorkPeriod::new(1, 100, date(2020, 1, 1), date(2020, 3, 1)),
///     WorkPeriod::new(2, 100, date(2020, 2, 1), date(2020, 4, 1)),
///     WorkPeriod::new(3, 100, date(2020, 1, 1), date(2020, 1, 15)),
/// ];
///
/// let totals = compute_overlaps(&periods);
/// assert_eq!(totals.get(&EmployeePair::new(1, 2).unwrap()), Some(30));
/// assert_eq!(totals.get(&EmployeePair::new(1, 3).unwrap()), Some(15));
/// assert_eq!(totals.get(&EmployeePair::new(2, 3).unwrap()), None);
/// ```
pub fn compute_overlaps(periods: &[WorkPeriod]) -> OverlapTotals {
    let groups = group_by_project(periods);
    let mut totals = OverlapTotals::new();

    for (project_id, members) in &groups {
        debug!(project_id, periods = members.len(), "Comparing project periods");
        accumulate_project(members, &mut totals);
    }

    info!(
        records = periods.len(),
        projects = groups.len(),
        pairs = totals.len(),
        "Overlap computation completed"
    );
    totals
}

/// Parallel variant of [`compute_overlaps`].
///
/// Project groups are independent, so each one is processed on the rayon
/// pool into a partial [`OverlapTotals`] and the partials are merged with
/// [`OverlapTotals::merge`]. The result is identical to the sequential one.
pub fn compute_overlaps_parallel(periods: &[WorkPeriod]) -> OverlapTotals {
    let groups: Vec<_> = group_by_project(periods).into_iter().collect();
    let project_count = groups.len();

    let totals = groups
        .par_iter()
        .map(|(_, members)| {
            let mut partial = OverlapTotals::new();
            accumulate_project(members, &mut partial);
            partial
        })
        .reduce(OverlapTotals::new, OverlapTotals::merge);

    info!(
        records = periods.len(),
        projects = project_count,
        pairs = totals.len(),
        "Parallel overlap computation completed"
    );
    totals
}

/// Adds the overlaps of one project's periods to `totals`.
fn accumulate_project(members: &[&WorkPeriod], totals: &mut OverlapTotals) {
    for (i, first) in members.iter().enumerate() {
        for second in &members[i + 1..] {
            // Same employee yields None.
            let Some(pair) = EmployeePair::new(first.employee_id, second.employee_id) else {
                continue;
            };
            if let Some(days) = overlap_days(first, second) {
                totals.add(pair, days);
            }
        }
    }
}
