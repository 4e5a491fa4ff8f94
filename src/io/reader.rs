//! Streaming CSV reader with iterator interface
//!
//! Provides a streaming iterator over the rows of a CSV file, deserialized
//! into one of the raw record types of the csv_format module.
//!
//! # Design
//!
//! The CsvReader reads one `StringRecord` at a time and deserializes it
//! against the header row, so each yielded row keeps its line number. Turning
//! raw rows into domain types is left to the caller.
//!
//! ```no_run
//! use bank_accounts::io::csv_format::TransactionCsvRecord;
//! use bank_accounts::io::reader::CsvReader;
//! use std::path::Path;
//!
//! let reader = CsvReader::<TransactionCsvRecord>::new(Path::new("transactions.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(row) => println!("line {}: {:?}", row.line, row.record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, unreadable header) are returned from `new()`
//! - Rows that fail to deserialize are yielded as Err variants, and
//!   iteration continues with the next row

use crate::types::AccountError;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::marker::PhantomData;
use std::path::Path;

/// One deserialized row and the line it came from
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRow<T> {
    /// 1-based line number in the file (the header is line 1)
    pub line: u64,
    pub record: T,
}

/// Streaming CSV reader
#[derive(Debug)]
pub struct CsvReader<T> {
    reader: csv::Reader<File>,
    headers: StringRecord,
    record: StringRecord,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> CsvReader<T> {
    /// Open a CSV file and read its header row
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (trailing optional columns may be absent)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be opened, or `ParseError` if
    /// the header row cannot be read.
    pub fn new(path: &Path) -> Result<Self, AccountError> {
        let file = File::open(path).map_err(|e| AccountError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
            _marker: PhantomData,
        })
    }
}

impl<T: DeserializeOwned> Iterator for CsvReader<T> {
    type Item = Result<CsvRow<T>, AccountError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self
                    .record
                    .position()
                    .map(|position| position.line())
                    .unwrap_or_default();

                Some(
                    self.record
                        .deserialize::<T>(Some(&self.headers))
                        .map(|record| CsvRow { line, record })
                        .map_err(|e| AccountError::ParseError {
                            line: Some(line),
                            message: e.to_string(),
                        }),
                )
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
