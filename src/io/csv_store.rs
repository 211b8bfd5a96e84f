//! CSV-backed record store loading
//!
//! Provides a streaming iterator over transaction records in a CSV file and
//! a strict loader that fills a [`MemoryRecordStore`] with them in row
//! order. Because the in-memory store answers `find_children` in insertion
//! order, a chronologically written file gives the exact child ordering the
//! builder and allocator depend on.
//!
//! # Error handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as Err variants with line numbers
//! - `load_store` aborts on the first bad row: a silently skipped ledger
//!   record would corrupt totals and allocations downstream

use crate::core::MemoryRecordStore;
use crate::io::csv_format::{convert_csv_row, CsvRow};
use crate::types::{LedgerError, TransactionRecord};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming reader over a transaction record CSV file
///
/// Implements `Iterator`, yielding `Result<TransactionRecord, LedgerError>`
/// per row. Rows are converted one at a time; memory usage does not depend
/// on the file size.
#[derive(Debug)]
pub struct CsvRecordReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl CsvRecordReader {
    /// Open a record CSV file for streaming iteration
    ///
    /// The reader trims whitespace from all fields and tolerates trailing
    /// empty columns (gateway fields are often blank).
    ///
    /// # Returns
    ///
    /// * `Ok(CsvRecordReader)` - the file was opened
    /// * `Err(LedgerError::FileNotFound)` - no file at the path
    /// * `Err(LedgerError::Io)` - any other open failure
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|error| {
            if error.kind() == std::io::ErrorKind::NotFound {
                LedgerError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                LedgerError::from(error)
            }
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 1, // header occupies line 1
        })
    }
}

impl Iterator for CsvRecordReader {
    type Item = Result<TransactionRecord, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut rows = self.reader.deserialize::<CsvRow>();

        match rows.next()? {
            Ok(row) => {
                self.line_num += 1;
                let line = self.line_num;
                Some(convert_csv_row(row).map_err(|error| LedgerError::Parse {
                    line: Some(line),
                    message: error.to_string(),
                }))
            }
            Err(error) => {
                self.line_num += 1;
                Some(Err(LedgerError::from(error)))
            }
        }
    }
}

/// Load a record CSV file into an in-memory store, strictly
///
/// Records are inserted in row order, so a chronologically ordered file
/// yields the store ordering contract the builder relies on. The first
/// unreadable or invalid row aborts the whole load.
pub fn load_store(path: &Path) -> Result<MemoryRecordStore, LedgerError> {
    let mut store = MemoryRecordStore::new();
    for result in CsvRecordReader::new(path)? {
        store.insert(result?);
    }
    Ok(store)
}
