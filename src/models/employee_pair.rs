//! Canonical employee pair.

use std::fmt;

use serde::Serialize;

use super::EmployeeId;

/// An unordered pair of two distinct employees.
///
/// The smaller identifier is always stored first, so `(5, 2)` and `(2, 5)`
/// are the same value and hash to the same key. A pair of an employee with
/// themself cannot be constructed.
///
/// # Example
///
/// ```
/// use overlap_engine::models::EmployeePair;
///
/// let pair = EmployeePair::new(5, 2).unwrap();
/// assert_eq!(pair, EmployeePair::new(2, 5).unwrap());
/// assert_eq!((pair.first(), pair.second()), (2, 5));
/// assert!(EmployeePair::new(7, 7).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EmployeePair {
    first: EmployeeId,
    second: EmployeeId,
}

impl EmployeePair {
    /// Creates the canonical pair for two employees.
    ///
    /// Returns `None` when both identifiers are equal.
    pub fn new(a: EmployeeId, b: EmployeeId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { first: a, second: b }),
            std::cmp::Ordering::Greater => Some(Self { first: b, second: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The smaller employee identifier.
    pub fn first(&self) -> EmployeeId {
        self.first
    }

    /// The larger employee identifier.
    pub fn second(&self) -> EmployeeId {
        self.second
    }
}

impl fmt::Display for EmployeePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.first, self.second)
    }
}
