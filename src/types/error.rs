//! Error types for the bank accounts library
//!
//! This module defines all error types that can occur while constructing
//! accounts and holders, moving money, or loading records.
//!
//! # Error Categories
//!
//! - **Construction Errors**: Non-integer identity fields, blank holder names
//! - **Transaction Errors**: Malformed or non-positive amounts, insufficient funds
//! - **Arithmetic Errors**: Balance changes that would overflow `Decimal`
//! - **Lookup Errors**: Unknown account numbers, unknown account types
//! - **File and CSV Errors**: Missing files, malformed rows
//!
//! Invalid optional configuration (overdraft limit, minimum balance, ...) is
//! never an error: it is replaced by a default when the account is built.

use rust_decimal::Decimal;
use thiserror::Error;

use super::money::Currency;
use super::AccountNumber;

/// Main error type for the bank accounts library
///
/// Each variant includes the context needed to report the failure to the
/// caller. Balance-changing operations that fail leave the balance untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// An identity field is not a whole number, or a required name is blank
    ///
    /// This is fatal to the construction call: no partial object is produced.
    #[error("{message}")]
    InvalidArgument {
        /// Description of the rejected argument
        message: String,
    },

    /// Amount is not numeric or not strictly positive
    ///
    /// This is a recoverable error - the balance is left unchanged.
    #[error("{operation} amount: {amount} must be {requirement}.")]
    InvalidAmount {
        /// Operation that rejected the amount ("Deposit" or "Withdrawal")
        operation: String,
        /// The rejected amount as it was supplied
        amount: String,
        /// What the amount failed to be ("numeric" or "positive")
        requirement: String,
    },

    /// Withdrawal would take the balance below the account's floor
    ///
    /// This is a recoverable error - the balance is left unchanged.
    #[error(
        "Withdrawal amount: {} from account {account} must not reduce the balance of {} below {}.",
        Currency(*requested),
        Currency(*balance),
        Currency(*floor)
    )]
    InsufficientFunds {
        /// Account number
        account: AccountNumber,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
        /// Lowest balance the account may reach
        floor: Decimal,
    },

    /// Balance change would overflow the representable range
    ///
    /// This is a recoverable error - the balance is left unchanged.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountNumber,
    },

    /// A deposit or withdrawal record carried no amount
    #[error("{operation} for account {account} requires an amount")]
    MissingAmount {
        /// Transaction type that requires an amount
        operation: String,
        /// Account number
        account: AccountNumber,
    },

    /// No account is registered under the requested number
    #[error("Account {account} not found")]
    AccountNotFound {
        /// Account number that was not found
        account: AccountNumber,
    },

    /// Account type column did not name a known variant
    #[error("Invalid account type '{account_type}'")]
    InvalidAccountType {
        /// The unrecognized account type string
        account_type: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error - the malformed record is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for AccountError {
    fn from(error: std::io::Error) -> Self {
        AccountError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AccountError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        AccountError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl AccountError {
    /// Create an InvalidArgument error for an identity field that is not a whole number
    pub fn not_an_integer(field: &str) -> Self {
        AccountError::InvalidArgument {
            message: format!("{} must be a non-negative integer.", field),
        }
    }

    /// Create an InvalidArgument error for a blank required text field
    pub fn blank(field: &str) -> Self {
        AccountError::InvalidArgument {
            message: format!("{} cannot be blank.", field),
        }
    }

    /// Create an InvalidArgument error for a date field not in `YYYY-MM-DD` form
    pub fn not_a_date(field: &str) -> Self {
        AccountError::InvalidArgument {
            message: format!("{} must be a date (YYYY-MM-DD).", field),
        }
    }

    /// Create an InvalidAmount error for an amount that could not be read as a number
    pub fn non_numeric_amount(operation: &str, amount: &str) -> Self {
        AccountError::InvalidAmount {
            operation: operation.to_string(),
            amount: amount.to_string(),
            requirement: "numeric".to_string(),
        }
    }

    /// Create an InvalidAmount error for a zero or negative amount
    pub fn non_positive_amount(operation: &str, amount: Decimal) -> Self {
        AccountError::InvalidAmount {
            operation: operation.to_string(),
            amount: Currency(amount).to_string(),
            requirement: "positive".to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(
        account: AccountNumber,
        balance: Decimal,
        requested: Decimal,
        floor: Decimal,
    ) -> Self {
        AccountError::InsufficientFunds {
            account,
            balance,
            requested,
            floor,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        AccountError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create a MissingAmount error
    pub fn missing_amount(operation: &str, account: AccountNumber) -> Self {
        AccountError::MissingAmount {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        AccountError::AccountNotFound { account }
    }

    /// Create an InvalidAccountType error
    pub fn invalid_account_type(account_type: &str) -> Self {
        AccountError::InvalidAccountType {
            account_type: account_type.to_string(),
        }
    }
}
