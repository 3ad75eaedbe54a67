//! Date-range intersection between two work periods.

use crate::models::WorkPeriod;

/// Returns the number of days two work periods share, counting both ends.
///
/// The shared range runs from the later start date to the earlier end date.
/// Returns `None` when that range is empty, which also covers periods whose
/// end date precedes their start date. Employee and project ids are not
/// looked at here.
///
/// # Example
///
/// ```
/// use overlap_engine::calculation::overlap_days;
/// use overlap_engine::models::WorkPeriod;
/// use chrono::NaiveDate;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let a = WorkPeriod::new(1, 100, date(2020, 1, 1), date(2020, 3, 1));
/// let b = WorkPeriod::new(2, 100, date(2020, 2, 1), date(2020, 4, 1));
///
/// // Feb 1 to Mar 1 inclusive
/// assert_eq!(overlap_days(&a, &b), Some(30));
/// ```
pub fn overlap_days(a: &WorkPeriod, b: &WorkPeriod) -> Option<u64> {
    let overlap_start = a.start_date.max(b.start_date);
    let overlap_end = a.end_date.min(b.end_date);

    if overlap_end < overlap_start {
        return None;
    }

    Some((overlap_end - overlap_start).num_days() as u64 + 1)
}
