//! Source format dispatch.
//!
//! Maps a [`SourceFormat`] tag to the function that turns a file of that
//! format into work periods. The mapping is a plain lookup table.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SourceConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::WorkPeriod;

use super::csv_reader::read_rows;
use super::record_builder::build_work_periods;

/// The formats work-period data can be read from.
///
/// # Example
///
/// ```
/// use overlap_engine::parsing::SourceFormat;
///
/// assert_eq!("CSV".parse::<SourceFormat>().unwrap(), SourceFormat::Csv);
/// assert!("xlsx".parse::<SourceFormat>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SourceFormat {
    /// Character-separated values.
    #[default]
    Csv,
}

impl SourceFormat {
    /// The lowercase tag naming this format.
    pub fn tag(self) -> &'static str {
        match self {
            SourceFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SourceFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(SourceFormat::Csv),
            _ => Err(EngineError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for SourceFormat {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SourceFormat> for String {
    fn from(value: SourceFormat) -> Self {
        value.tag().to_string()
    }
}

/// Strategy that reads a source file into work periods.
///
/// The third argument is the date substituted for open end dates.
pub type WorkDataParser = fn(&Path, &SourceConfig, NaiveDate) -> EngineResult<Vec<WorkPeriod>>;

/// Lookup table from source format to parsing strategy.
///
/// # Example
///
/// ```
/// use overlap_engine::parsing::{ParserRegistry, SourceFormat};
///
/// let registry = ParserRegistry::new();
/// assert!(registry.parser_for(SourceFormat::Csv).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ParserRegistry {
    parsers: HashMap<SourceFormat, WorkDataParser>,
}

impl ParserRegistry {
    /// Creates a registry with every built-in format registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(SourceFormat::Csv, parse_csv_source);
        registry
    }

    /// Creates a registry with no formats registered.
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Registers `parser` for `format`, replacing any previous entry.
    pub fn register(&mut self, format: SourceFormat, parser: WorkDataParser) {
        self.parsers.insert(format, parser);
    }

    /// Returns the parser registered for `format`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedFormat`] when nothing is registered.
    pub fn parser_for(&self, format: SourceFormat) -> EngineResult<WorkDataParser> {
        self.parsers
            .get(&format)
            .copied()
            .ok_or_else(|| EngineError::UnsupportedFormat {
                format: format.to_string(),
            })
    }

    /// Reads `path` with the parser for `settings.format`.
    pub fn load<P: AsRef<Path>>(
        &self,
        path: P,
        settings: &SourceConfig,
        today: NaiveDate,
    ) -> EngineResult<Vec<WorkPeriod>> {
        let path = path.as_ref();
        let parser = self.parser_for(settings.format)?;
        let periods = parser(path, settings, today)?;
        info!(
            source = %path.display(),
            format = %settings.format,
            records = periods.len(),
            "Loaded work periods"
        );
        Ok(periods)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads work periods from `path` using the built-in registry.
///
/// # Example
///
/// ```no_run
/// use overlap_engine::config::SourceConfig;
/// use overlap_engine::parsing::load_work_periods;
/// use chrono::Local;
///
/// let today = Local::now().date_naive();
/// let periods = load_work_periods("work-data.csv", &SourceConfig::default(), today)?;
/// # Ok::<(), overlap_engine::error::EngineError>(())
/// ```
pub fn load_work_periods<P: AsRef<Path>>(
    path: P,
    settings: &SourceConfig,
    today: NaiveDate,
) -> EngineResult<Vec<WorkPeriod>> {
    ParserRegistry::new().load(path, settings, today)
}

fn parse_csv_source(
    path: &Path,
    settings: &SourceConfig,
    today: NaiveDate,
) -> EngineResult<Vec<WorkPeriod>> {
    let rows = read_rows(path, settings)?;
    build_work_periods(&rows, today)
}
