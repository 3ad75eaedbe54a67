//! Input parsing for the Overlap Engine.
//!
//! Turns a source file into [`WorkPeriod`](crate::models::WorkPeriod) values:
//! the CSV reader produces raw rows, the record builder validates them and
//! parses their dates, and the registry picks the reader for a format tag.
//! Malformed input is rejected here so the overlap computation never sees it.

mod csv_reader;
mod date_parser;
mod record_builder;
mod registry;

pub use csv_reader::{read_rows, read_rows_from_reader};
pub use date_parser::{SUPPORTED_DATE_FORMATS, parse_date};
pub use record_builder::{OPEN_END_TOKEN, build_work_periods};
pub use registry::{ParserRegistry, SourceFormat, WorkDataParser, load_work_periods};
