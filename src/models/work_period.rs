//! Work period model.
//!
//! A [`WorkPeriod`] is one employee's stint on one project. The same employee
//! may appear many times, even on the same project, when they left and came
//! back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of an employee.
pub type EmployeeId = i64;

/// Identifier of a project.
pub type ProjectId = i64;

/// One contiguous date range during which an employee was assigned to a project.
///
/// Both dates are inclusive. `end_date < start_date` is tolerated and simply
/// never overlaps anything.
///
/// # Example
///
/// ```
/// use overlap_engine::models::WorkPeriod;
/// use chrono::NaiveDate;
///
/// let period = WorkPeriod::new(
///     143,
///     12,
///     NaiveDate::from_ymd_opt(2013, 11, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2014, 1, 5).unwrap(),
/// );
/// assert_eq!(period.employee_id, 143);
/// assert_eq!(period.duration_days(), 66);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkPeriod {
    /// The employee who worked the period.
    pub employee_id: EmployeeId,
    /// The project the period was worked on.
    pub project_id: ProjectId,
    /// The first day of the period.
    pub start_date: NaiveDate,
    /// The last day of the period.
    pub end_date: NaiveDate,
}

impl WorkPeriod {
    /// Creates a new work period.
    pub fn new(
        employee_id: EmployeeId,
        project_id: ProjectId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            employee_id,
            project_id,
            start_date,
            end_date,
        }
    }

    /// Returns the number of calendar days covered, counting both ends.
    ///
    /// An inverted period covers zero days.
    pub fn duration_days(&self) -> u64 {
        if self.end_date < self.start_date {
            return 0;
        }
        (self.end_date - self.start_date).num_days() as u64 + 1
    }
}
