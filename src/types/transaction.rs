//! Transaction-related types
//!
//! This module defines the transaction kinds an account understands, the raw
//! records the engine applies, and the event an account hands to its
//! notification policy after a balance change.

use super::money::Currency;
use super::AccountNumber;
use rust_decimal::Decimal;

/// Balance-changing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account, subject to the account's floor
    Withdrawal,

    /// Withdraw the account's current service charges
    ///
    /// Only appears in transaction records; the account itself sees a
    /// withdrawal of the computed charge.
    ServiceCharge,
}

impl TransactionKind {
    /// Human-readable label used in error messages and alerts
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::ServiceCharge => "Service charge",
        }
    }
}

/// Input transaction record
///
/// The amount is kept as the raw text from the input so that a malformed
/// value reaches the account and is rejected there with an `InvalidAmount`
/// error citing it. Service-charge records carry no amount.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// The type of transaction
    pub kind: TransactionKind,

    /// The account this transaction applies to
    pub account: AccountNumber,

    /// Raw amount text (required for deposits and withdrawals)
    pub amount: Option<String>,
}

/// A balance change that has already been applied to an account
///
/// Handed to the account's notification policy to decide whether the
/// attached holders should hear about it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionEvent {
    /// Deposit or withdrawal
    pub kind: TransactionKind,

    /// Account the change was applied to
    pub account: AccountNumber,

    /// Amount moved (always positive)
    pub amount: Decimal,

    /// Balance before the change
    pub balance_before: Decimal,

    /// Balance after the change
    pub balance_after: Decimal,

    /// Balance below which the account starts paying a penalty charge
    ///
    /// The Chequing overdraft limit or the Savings minimum balance;
    /// `None` for Investment accounts.
    pub penalty_threshold: Option<Decimal>,
}

impl TransactionEvent {
    /// Whether this change took the balance from at or above the penalty
    /// threshold to strictly below it
    pub fn crossed_penalty_threshold(&self) -> bool {
        self.penalty_threshold.is_some_and(|threshold| {
            self.balance_before >= threshold && self.balance_after < threshold
        })
    }

    /// Notification text for this event, e.g.
    /// `"Withdrawal of $100.00 on account 12345. Balance is now $28.50."`
    pub fn message(&self) -> String {
        format!(
            "{} of {} on account {}. Balance is now {}.",
            self.kind.label(),
            Currency(self.amount),
            self.account,
            Currency(self.balance_after)
        )
    }
}
