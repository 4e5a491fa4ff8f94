//! CSV format handling for client, account and transaction records
//!
//! This module centralizes all CSV format concerns, providing:
//! - Raw record structures for deserialization
//! - Conversion from raw records to domain types
//! - Account and alert output serialization
//!
//! Raw records keep every field as text so that conversion, not
//! deserialization, decides what a malformed value means: identity fields
//! must be integers, while a bad optional term falls back to its default.

use crate::core::account::Account;
use crate::core::alert::Alert;
use crate::core::clock::Clock;
use crate::core::holder::Holder;
use crate::core::traits::{AlertSink, NotificationPolicy};
use crate::types::{parse_identity, AccountError, TransactionKind, TransactionRecord};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::io::Write;
use std::sync::Arc;

/// Date format of the `date_created` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Client row: `client_number,first_name,last_name,email_address`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientCsvRecord {
    pub client_number: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email_address: String,
}

/// Account row
///
/// `account_number,client_number,balance,date_created,account_type,`
/// `overdraft_limit,overdraft_rate,minimum_balance,management_fee`
///
/// Only the columns used by the row's account type need a value.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AccountCsvRecord {
    pub account_number: String,
    pub client_number: String,
    #[serde(default)]
    pub balance: Option<String>,
    pub date_created: String,
    pub account_type: String,
    #[serde(default)]
    pub overdraft_limit: Option<String>,
    #[serde(default)]
    pub overdraft_rate: Option<String>,
    #[serde(default)]
    pub minimum_balance: Option<String>,
    #[serde(default)]
    pub management_fee: Option<String>,
}

/// Transaction row: `type,account,amount`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TransactionCsvRecord {
    #[serde(rename = "type")]
    pub tx_type: String,
    pub account: String,
    #[serde(default)]
    pub amount: Option<String>,
}

/// Convert a client row to a holder whose alerts go to `sink`
///
/// # Errors
///
/// Returns `InvalidArgument` if the client number is not an integer or a
/// name is blank. A malformed email is normalized, not rejected.
pub fn convert_client_record(
    record: &ClientCsvRecord,
    sink: Arc<dyn AlertSink>,
    clock: Arc<dyn Clock>,
) -> Result<Holder, AccountError> {
    let client_number = parse_identity("Client number", &record.client_number)?;
    let holder = Holder::new(
        client_number,
        &record.first_name,
        &record.last_name,
        &record.email_address,
        sink,
    )?;
    Ok(holder.with_clock(clock))
}

/// Convert an account row to an account using `policy` for notifications
///
/// An empty or non-numeric balance opens the account at zero, and empty or
/// non-numeric terms take the variant's defaults.
///
/// # Errors
///
/// Returns:
/// - `InvalidArgument` if an identity field is not an integer or the
///   creation date is not `YYYY-MM-DD`
/// - `InvalidAccountType` if the type is not chequing, savings or investment
pub fn convert_account_record(
    record: &AccountCsvRecord,
    policy: Arc<dyn NotificationPolicy>,
) -> Result<Account, AccountError> {
    let account_number = parse_identity("Account number", &record.account_number)?;
    let client_number = parse_identity("Client number", &record.client_number)?;
    let date_created = NaiveDate::parse_from_str(record.date_created.trim(), DATE_FORMAT)
        .map_err(|_| AccountError::not_a_date("Date created"))?;
    let balance = text(&record.balance);

    let account = match record.account_type.trim().to_lowercase().as_str() {
        "chequing" => Account::chequing(
            account_number,
            client_number,
            balance,
            date_created,
            text(&record.overdraft_limit),
            text(&record.overdraft_rate),
        ),
        "savings" => Account::savings(
            account_number,
            client_number,
            balance,
            date_created,
            text(&record.minimum_balance),
        ),
        "investment" => Account::investment(
            account_number,
            client_number,
            balance,
            date_created,
            text(&record.management_fee),
        ),
        _ => return Err(AccountError::invalid_account_type(&record.account_type)),
    };

    Ok(account.with_policy(policy))
}

/// Convert a transaction row to a transaction record
///
/// The amount stays as text; the account validates it when it is applied.
///
/// # Errors
///
/// Returns `ParseError` for an unknown transaction type and
/// `InvalidArgument` if the account number is not an integer.
pub fn convert_transaction_record(
    record: &TransactionCsvRecord,
) -> Result<TransactionRecord, AccountError> {
    let kind = match record.tx_type.trim().to_lowercase().as_str() {
        "deposit" => TransactionKind::Deposit,
        "withdraw" | "withdrawal" => TransactionKind::Withdrawal,
        "charge" => TransactionKind::ServiceCharge,
        _ => {
            return Err(AccountError::ParseError {
                line: None,
                message: format!("Invalid transaction type '{}'", record.tx_type),
            })
        }
    };
    let account = parse_identity("Account number", &record.account)?;
    let amount = record
        .amount
        .as_ref()
        .filter(|amount| !amount.trim().is_empty())
        .cloned();

    Ok(TransactionRecord {
        kind,
        account,
        amount,
    })
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

fn two_places(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Write account states to CSV format
///
/// Columns: account_number, client_number, account_type, balance,
/// service_charges. Accounts are sorted by account number and charges are
/// evaluated on `today`.
///
/// # Errors
///
/// Returns an error if writing or flushing fails.
pub fn write_accounts_csv(
    accounts: &[&Account],
    today: NaiveDate,
    output: &mut dyn Write,
) -> Result<(), AccountError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record([
        "account_number",
        "client_number",
        "account_type",
        "balance",
        "service_charges",
    ])?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by_key(|account| account.account_number());

    for account in sorted_accounts {
        writer.write_record(&[
            account.account_number().to_string(),
            account.client_number().to_string(),
            account.kind().name().to_string(),
            two_places(account.balance()),
            two_places(account.service_charges_at(today)),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write delivered alerts to CSV format with columns: subject, body
///
/// # Errors
///
/// Returns an error if writing or flushing fails.
pub fn write_alerts_csv(alerts: &[Alert], output: &mut dyn Write) -> Result<(), AccountError> {
    let mut writer = csv::Writer::from_writer(output);

    if alerts.is_empty() {
        writer.write_record(["subject", "body"])?;
    }
    for alert in alerts {
        writer.serialize(alert)?;
    }

    writer.flush()?;
    Ok(())
}
