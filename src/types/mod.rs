//! Types module
//!
//! Contains the plain data shared across the library:
//! - `error`: Error types for account construction, transactions and loading
//! - `money`: Amount parsing and currency formatting
//! - `transaction`: Transaction kinds, input records and notification events

pub mod error;
pub mod money;
pub mod transaction;

pub use error::AccountError;
pub use money::{parse_decimal, AmountInput, Currency};
pub use transaction::{TransactionEvent, TransactionKind, TransactionRecord};

/// Account identifier
pub type AccountNumber = u32;

/// Client (holder) identifier
pub type ClientNumber = u32;

/// Parse a raw identity field (account or client number)
///
/// Identity fields must be non-negative whole numbers; anything else, including
/// a negative integer, is rejected with an
/// `InvalidArgument` error naming the field, e.g.
/// `"Account number must be a non-negative integer."`.
pub fn parse_identity(field: &str, raw: &str) -> Result<u32, AccountError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| AccountError::not_an_integer(field))
}
