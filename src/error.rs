//! Error types for the Overlap Engine.
//!
//! The overlap computation itself cannot fail. Every variant here belongs to
//! the collaborators around it: configuration loading, reading the source
//! and turning raw rows into work periods.

use thiserror::Error;

/// The main error type for the Overlap Engine.
///
/// # Example
///
/// ```
/// use overlap_engine::error::EngineError;
///
/// let error = EngineError::InvalidDateFormat {
///     value: "15-022-2022-2".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unsupported date format: 15-022-2022-2");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date token matched none of the supported formats.
    #[error("Unsupported date format: {value}")]
    InvalidDateFormat {
        /// The raw token that could not be parsed.
        value: String,
    },

    /// A numeric field could not be parsed.
    #[error("Invalid value for field '{field}': {value}")]
    InvalidField {
        /// The name of the field.
        field: String,
        /// The raw value that was rejected.
        value: String,
    },

    /// The source data could not be read or decoded.
    #[error("Could not process source '{source_name}': {message}")]
    SourceUnreadable {
        /// The file name or label of the source.
        source_name: String,
        /// A description of the underlying failure.
        message: String,
    },

    /// No parser is registered for the requested format tag.
    #[error("Unsupported source format: {format}")]
    UnsupportedFormat {
        /// The format tag that was requested.
        format: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_format_displays_value() {
        let error = EngineError::InvalidDateFormat {
            value: "invalid-date".to_string(),
        };
        assert_eq!(error.to_string(), "Unsupported date format: invalid-date");
    }

    #[test]
    fn test_invalid_field_displays_field_and_value() {
        let error = EngineError::InvalidField {
            field: "employee_id".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid value for field 'employee_id': abc");
    }

    #[test]
    fn test_source_unreadable_displays_source_and_message() {
        let error = EngineError::SourceUnreadable {
            source_name: "work-data.csv".to_string(),
            message: "No such file or directory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Could not process source 'work-data.csv': No such file or directory"
        );
    }

    #[test]
    fn test_unsupported_format_displays_tag() {
        let error = EngineError::UnsupportedFormat {
            format: "xlsx".to_string(),
        };
        assert_eq!(error.to_string(), "Unsupported source format: xlsx");
    }

    #[test]
    fn test_config_errors_display_path() {
        let not_found = EngineError::ConfigNotFound {
            path: "/missing/overlap.yaml".to_string(),
        };
        assert_eq!(
            not_found.to_string(),
            "Configuration file not found: /missing/overlap.yaml"
        );

        let parse = EngineError::ConfigParseError {
            path: "overlap.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            parse.to_string(),
            "Failed to parse configuration file 'overlap.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unsupported() -> EngineResult<()> {
            Err(EngineError::UnsupportedFormat {
                format: "xml".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unsupported()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
