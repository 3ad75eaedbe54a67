//! Conversion of raw rows into work periods.
//!
//! Each row carries four fields: employee id, project id, start date and end
//! date. Rows missing any of them are skipped rather than failing the run.
//! An end date of `NULL` marks a period that is still ongoing.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::WorkPeriod;

use super::date_parser::parse_date;

/// End-date token meaning "still ongoing", compared case-insensitively.
pub const OPEN_END_TOKEN: &str = "NULL";

const FIELD_NAMES: [&str; 4] = ["employee_id", "project_id", "date_from", "date_to"];

/// Builds work periods from raw rows.
///
/// # Arguments
///
/// * `rows` - Raw rows as read from the source
/// * `today` - Date substituted for an open end date
///
/// # Behavior
///
/// - Rows with fewer than four fields, or with any of the first four fields
///   blank, are skipped
/// - Fields beyond the fourth are ignored
/// - An end date equal to `NULL` (any case) becomes `today`
///
/// # Errors
///
/// - [`EngineError::InvalidField`] when an id is not a 64-bit integer
/// - [`EngineError::InvalidDateFormat`] when a date matches no supported format
///
/// # Example
///
/// ```
/// use overlap_engine::parsing::build_work_periods;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let rows = vec![
///     vec!["143", "12", "2013-11-01", "2014-01-05"],
///     vec!["2", "12", "2013-11-01", ""],
///     vec!["218", "10", "2012-05-16", "NULL"],
/// ];
///
/// let periods = build_work_periods(&rows, today).unwrap();
/// assert_eq!(periods.len(), 2);
/// assert_eq!(periods[1].end_date, today);
/// ```
pub fn build_work_periods<R, S>(rows: &[R], today: NaiveDate) -> EngineResult<Vec<WorkPeriod>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut periods = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for (index, row) in rows.iter().enumerate() {
        let fields = row.as_ref();
        if is_incomplete(fields) {
            debug!(row = index + 1, fields = fields.len(), "Skipping incomplete row");
            skipped += 1;
            continue;
        }
        periods.push(build_work_period(fields, today)?);
    }

    info!(
        rows = rows.len(),
        records = periods.len(),
        skipped,
        "Built work periods"
    );
    Ok(periods)
}

fn is_incomplete<S: AsRef<str>>(fields: &[S]) -> bool {
    fields.len() < FIELD_NAMES.len()
        || fields[..FIELD_NAMES.len()]
            .iter()
            .any(|field| field.as_ref().trim().is_empty())
}

fn build_work_period<S: AsRef<str>>(fields: &[S], today: NaiveDate) -> EngineResult<WorkPeriod> {
    let employee_id = parse_id(fields[0].as_ref(), FIELD_NAMES[0])?;
    let project_id = parse_id(fields[1].as_ref(), FIELD_NAMES[1])?;
    let start_date = parse_date(fields[2].as_ref())?;
    let end_date = parse_end_date(fields[3].as_ref(), today)?;

    Ok(WorkPeriod::new(employee_id, project_id, start_date, end_date))
}

fn parse_id(raw: &str, field: &str) -> EngineResult<i64> {
    raw.trim().parse().map_err(|_| EngineError::InvalidField {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

fn parse_end_date(raw: &str, today: NaiveDate) -> EngineResult<NaiveDate> {
    if raw.trim().eq_ignore_ascii_case(OPEN_END_TOKEN) {
        Ok(today)
    } else {
        parse_date(raw)
    }
}
