//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output serialization)
//! - `reader` - Streaming CSV reader with iterator interface
//! - `loader` - Builds a Bank from client and account files, reads transactions

pub mod csv_format;
pub mod loader;
pub mod reader;

pub use csv_format::{
    convert_account_record, convert_client_record, convert_transaction_record,
    write_accounts_csv, write_alerts_csv, AccountCsvRecord, ClientCsvRecord,
    TransactionCsvRecord,
};
pub use loader::{load_bank, read_transactions};
pub use reader::{CsvReader, CsvRow};
