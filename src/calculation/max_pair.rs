//! Selection of the pair with the longest accumulated overlap.

use crate::models::{OverlapTotals, PairOverlap};

/// Finds the pair with the greatest total overlap.
///
/// Returns `None` when `totals` is empty. When several pairs share the
/// maximum, any one of them may be returned; callers must not rely on which.
///
/// # Example
///
/// ```
/// use overlap_engine::calculation::find_max_pair;
/// use overlap_engine::models::{EmployeePair, OverlapTotals};
///
/// let mut totals = OverlapTotals::new();
/// totals.add(EmployeePair::new(1, 2).unwrap(), 10);
/// totals.add(EmployeePair::new(3, 4).unwrap(), 25);
///
/// let best = find_max_pair(&totals).unwrap();
/// assert_eq!(best.pair, EmployeePair::new(3, 4).unwrap());
/// assert_eq!(best.days, 25);
///
/// assert!(find_max_pair(&OverlapTotals::new()).is_none());
/// ```
pub fn find_max_pair(totals: &OverlapTotals) -> Option<PairOverlap> {
    totals.iter().max_by_key(|entry| entry.days)
}
