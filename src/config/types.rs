//! Configuration types for the Overlap Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from a YAML configuration file. Every field has a
//! default, so an empty file is a valid configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parsing::SourceFormat;

/// A single-byte field separator for delimited input.
///
/// # Example
///
/// ```
/// use overlap_engine::config::Separator;
///
/// let separator: Separator = ";".parse().unwrap();
/// assert_eq!(separator.as_byte(), b';');
/// assert!("ü".parse::<Separator>().is_err());
/// assert!(";;".parse::<Separator>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Separator(u8);

impl Separator {
    /// Returns the separator as a byte.
    pub fn as_byte(self) -> u8 {
        self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator(b',')
    }
}

impl TryFrom<char> for Separator {
    type Error = String;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        if value.is_ascii() && value != '\n' && value != '\r' && value != '"' {
            Ok(Separator(value as u8))
        } else {
            Err(format!("separator must be a single ASCII character, got {:?}", value))
        }
    }
}

impl From<Separator> for char {
    fn from(value: Separator) -> Self {
        value.0 as char
    }
}

impl FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Separator::try_from(c),
            (Some('\\'), Some('t')) if s.len() == 2 => Ok(Separator(b'\t')),
            _ => Err(format!("separator must be a single character, got {:?}", s)),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 as char)
    }
}

/// Settings for reading the work-period source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// The format of the source file.
    pub format: SourceFormat,
    /// The field separator for delimited formats.
    pub separator: Separator,
    /// Whether the first row is a header to skip.
    pub has_header: bool,
}

/// Settings for the overlap computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Whether project groups are processed in parallel.
    pub parallel: bool,
}

/// The complete engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Source settings.
    pub source: SourceConfig,
    /// Computation settings.
    pub engine: EngineSettings,
}
