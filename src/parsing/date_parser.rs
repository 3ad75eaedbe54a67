//! Multi-format calendar date parsing.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Date formats accepted in source data, tried in this order.
///
/// Month names are English and matched case-insensitively. Years take four
/// digits and days and months two, so `18-05-24` or `2024-5-18` are rejected.
pub const SUPPORTED_DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d", // 2024-05-18
    "%d-%m-%Y", // 18-05-2024
    "%Y/%m/%d", // 2024/05/18
    "%d/%m/%Y", // 18/05/2024
    "%d %b %Y", // 18 May 2024
    "%Y %b %d", // 2024 May 18
];

/// Parses a raw date token using the first supported format that matches.
///
/// Surrounding whitespace is ignored. A token only matches a format when it
/// renders back to the same text, which rules out short years that chrono's
/// `%Y` would otherwise read as years in the first century.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateFormat`] carrying the raw token when no
/// format matches.
///
/// # Example
///
/// ```
/// use overlap_engine::parsing::parse_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 5, 18).unwrap();
/// assert_eq!(parse_date("2024-05-18").unwrap(), expected);
/// assert_eq!(parse_date("18/05/2024").unwrap(), expected);
/// assert_eq!(parse_date(" 18 May 2024 ").unwrap(), expected);
/// assert!(parse_date("invalid-date").is_err());
/// ```
pub fn parse_date(raw: &str) -> EngineResult<NaiveDate> {
    let trimmed = raw.trim();
    SUPPORTED_DATE_FORMATS
        .iter()
        .find_map(|format| parse_exact(trimmed, format))
        .ok_or_else(|| EngineError::InvalidDateFormat {
            value: raw.to_string(),
        })
}

fn parse_exact(token: &str, format: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(token, format).ok()?;
    date.format(format)
        .to_string()
        .eq_ignore_ascii_case(token)
        .then_some(date)
}
