//! Reading delimited text into raw rows.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::config::SourceConfig;
use crate::error::{EngineError, EngineResult};

/// Reads every row of a delimited file.
///
/// The separator and header handling come from `settings`. Rows may have
/// differing lengths and fields are trimmed; completeness is checked later
/// by the record builder.
///
/// # Errors
///
/// Returns [`EngineError::SourceUnreadable`] if the file cannot be opened or
/// its content cannot be decoded.
///
/// # Example
///
/// ```no_run
/// use overlap_engine::config::SourceConfig;
/// use overlap_engine::parsing::read_rows;
///
/// let rows = read_rows("work-data.csv", &SourceConfig::default())?;
/// println!("{} rows", rows.len());
/// # Ok::<(), overlap_engine::error::EngineError>(())
/// ```
pub fn read_rows<P: AsRef<Path>>(path: P, settings: &SourceConfig) -> EngineResult<Vec<Vec<String>>> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    let file = File::open(path).map_err(|e| EngineError::SourceUnreadable {
        source_name: source_name.clone(),
        message: e.to_string(),
    })?;

    read_rows_from_reader(file, &source_name, settings)
}

/// Reads every row from any byte source.
///
/// `source_name` labels the source in errors and logs.
///
/// # Example
///
/// ```
/// use overlap_engine::config::SourceConfig;
/// use overlap_engine::parsing::read_rows_from_reader;
///
/// let data = "143,12,2013-11-01,2014-01-05\n218,10,2012-05-16,NULL\n";
/// let rows = read_rows_from_reader(data.as_bytes(), "inline", &SourceConfig::default()).unwrap();
/// assert_eq!(rows[1], vec!["218", "10", "2012-05-16", "NULL"]);
/// ```
pub fn read_rows_from_reader<R: Read>(
    reader: R,
    source_name: &str,
    settings: &SourceConfig,
) -> EngineResult<Vec<Vec<String>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(settings.separator.as_byte())
        .has_headers(settings.has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| EngineError::SourceUnreadable {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(source = source_name, rows = rows.len(), "Read delimited rows");
    Ok(rows)
}
