//! I/O module
//!
//! Handles CSV record files.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row type, conversion to records)
//! - `csv_store` - Streaming reader and strict in-memory store loader

pub mod csv_format;
pub mod csv_store;

pub use csv_format::{convert_csv_row, CsvRow};
pub use csv_store::{load_store, CsvRecordReader};
