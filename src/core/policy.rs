//! Significance rules for account notifications
//!
//! Not every deposit or withdrawal deserves an alert. An account asks its
//! [`NotificationPolicy`] after each applied change; two rules are provided.
//!
//! - [`ThresholdPolicy`] (default): large transactions, and withdrawals that
//!   take the balance below the account's penalty threshold
//! - [`EveryWithdrawal`]: every successful withdrawal, never a deposit

use crate::core::traits::NotificationPolicy;
use crate::types::{TransactionEvent, TransactionKind};
use rust_decimal::Decimal;

/// Transaction amount at or above which the default policy always notifies (10,000.00)
pub const DEFAULT_LARGE_TRANSACTION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 2);

/// Notify on large transactions and on crossing into penalty territory
///
/// An event is significant when either:
/// - its amount is at least `large_transaction`, or
/// - the balance went from at or above the account's penalty threshold
///   (overdraft limit, minimum balance) to strictly below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPolicy {
    pub large_transaction: Decimal,
}

impl ThresholdPolicy {
    pub fn new(large_transaction: Decimal) -> Self {
        ThresholdPolicy { large_transaction }
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        ThresholdPolicy::new(DEFAULT_LARGE_TRANSACTION)
    }
}

impl NotificationPolicy for ThresholdPolicy {
    fn should_notify(&self, event: &TransactionEvent) -> bool {
        event.amount >= self.large_transaction || event.crossed_penalty_threshold()
    }
}

/// Notify on every withdrawal, never on a deposit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EveryWithdrawal;

impl NotificationPolicy for EveryWithdrawal {
    fn should_notify(&self, event: &TransactionEvent) -> bool {
        event.kind == TransactionKind::Withdrawal
    }
}
