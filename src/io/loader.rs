//! Loading holders, accounts and transactions from CSV files
//!
//! Malformed rows are logged and skipped; only a file that cannot be opened
//! is fatal. Each loaded account has its owning holder attached.

use crate::core::bank::Bank;
use crate::core::clock::Clock;
use crate::core::traits::{AccountStore, AlertSink, NotificationPolicy};
use crate::io::csv_format::{
    convert_account_record, convert_client_record, convert_transaction_record,
    AccountCsvRecord, ClientCsvRecord, TransactionCsvRecord,
};
use crate::io::reader::{CsvReader, CsvRow};
use crate::types::{AccountError, TransactionRecord};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

/// Load holders from `clients` and accounts from `accounts` into a new Bank
///
/// Holders send their alerts to `sink` and timestamp them with `clock`.
/// Accounts notify according to `policy`.
///
/// # Errors
///
/// Returns `IoError` if either file cannot be opened.
pub fn load_bank(
    clients: &Path,
    accounts: &Path,
    sink: Arc<dyn AlertSink>,
    clock: Arc<dyn Clock>,
    policy: Arc<dyn NotificationPolicy>,
) -> Result<Bank, AccountError> {
    let mut bank = Bank::new();

    for row in rows::<ClientCsvRecord>(clients, "client")? {
        match convert_client_record(&row.record, Arc::clone(&sink), Arc::clone(&clock)) {
            Ok(holder) => {
                bank.add_holder(holder);
            }
            Err(e) => tracing::warn!(line = row.line, error = %e, "skipping client record"),
        }
    }

    for row in rows::<AccountCsvRecord>(accounts, "account")? {
        match convert_account_record(&row.record, Arc::clone(&policy)) {
            Ok(account) => {
                if bank.account(account.account_number()).is_some() {
                    tracing::warn!(
                        line = row.line,
                        account = account.account_number(),
                        "duplicate account number, replacing earlier record"
                    );
                }
                bank.open_account(account);
            }
            Err(e) => tracing::warn!(line = row.line, error = %e, "skipping account record"),
        }
    }

    tracing::info!(
        holders = bank.holders().len(),
        accounts = bank.account_count(),
        "loaded bank"
    );
    Ok(bank)
}

/// Read transaction records from `path`, skipping malformed rows
///
/// # Errors
///
/// Returns `IoError` if the file cannot be opened.
pub fn read_transactions(
    path: &Path,
) -> Result<impl Iterator<Item = TransactionRecord>, AccountError> {
    Ok(rows::<TransactionCsvRecord>(path, "transaction")?.filter_map(|row| {
        convert_transaction_record(&row.record)
            .inspect_err(|e| {
                tracing::warn!(line = row.line, error = %e, "skipping transaction record")
            })
            .ok()
    }))
}

/// Rows of `path` that deserialize, with the others logged and dropped
fn rows<T: DeserializeOwned>(
    path: &Path,
    kind: &'static str,
) -> Result<impl Iterator<Item = CsvRow<T>>, AccountError> {
    let reader = CsvReader::<T>::new(path)?;
    Ok(reader.filter_map(move |result| {
        result
            .inspect_err(|e| tracing::warn!(kind, error = %e, "skipping malformed row"))
            .ok()
    }))
}
