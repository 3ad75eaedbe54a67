//! Grouping of work periods by project.

use std::collections::BTreeMap;

use crate::models::{ProjectId, WorkPeriod};

/// Partitions work periods into one group per project.
///
/// Projects are iterated in ascending id order and periods keep their input
/// order inside a group, so the grouping is fully deterministic for a given
/// input. Every period appears in exactly one group.
///
/// # Example
///
/// ```
/// use overlap_engine::calculation::group_by_project;
/// use overlap_engine::models::WorkPeriod;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let periods = vec![
///     WorkPeriod::new(1, 200, day, day),
///     WorkPeriod::new(2, 100, day, day),
///     WorkPeriod::new(3, 200, day, day),
/// ];
///
/// let groups = group_by_project(&periods);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[&200].len(), 2);
/// assert_eq!(groups[&200][1].employee_id, 3);
/// ```
pub fn group_by_project(periods: &[WorkPeriod]) -> BTreeMap<ProjectId, Vec<&WorkPeriod>> {
    let mut groups: BTreeMap<ProjectId, Vec<&WorkPeriod>> = BTreeMap::new();
    for period in periods {
        groups.entry(period.project_id).or_default().push(period);
    }
    groups
}
