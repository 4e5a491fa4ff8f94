//! Transaction processing engine
//!
//! This module provides the TransactionEngine that applies transaction records
//! to the accounts held by an [`AccountStore`].
//!
//! The engine enforces business rules such as:
//! - Deposits and withdrawals must carry an amount
//! - Records for unknown accounts are rejected without side effects
//! - Service charges are computed on the engine's clock date and withdrawn
//!   like any other withdrawal, so they respect the account's floor

use crate::core::clock::{Clock, SystemClock};
use crate::core::traits::AccountStore;
use crate::types::{AccountError, TransactionKind, TransactionRecord};
use std::sync::Arc;

/// Transaction processing engine
///
/// Owns the store for the duration of a run. Every balance change goes through
/// the account's own `deposit`/`withdraw`, so validation and notifications are
/// the account's business.
pub struct TransactionEngine<S: AccountStore> {
    store: S,
    clock: Arc<dyn Clock>,
}

impl<S: AccountStore> TransactionEngine<S> {
    /// Create an engine over `store` that evaluates service charges today
    pub fn new(store: S) -> Self {
        TransactionEngine {
            store,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used to evaluate service charges
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Process a single transaction record
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - A deposit or withdrawal has no amount
    /// - The account rejects the amount (not numeric, not positive, below floor)
    ///
    /// The account is unchanged on error.
    pub fn process(&mut self, record: TransactionRecord) -> Result<(), AccountError> {
        let today = self.clock.today();
        let account = self
            .store
            .account_mut(record.account)
            .ok_or_else(|| AccountError::account_not_found(record.account))?;

        match record.kind {
            TransactionKind::Deposit | TransactionKind::Withdrawal => {
                let amount = record.amount.ok_or_else(|| {
                    AccountError::missing_amount(record.kind.label(), record.account)
                })?;

                if record.kind == TransactionKind::Deposit {
                    account.deposit(amount)
                } else {
                    account.withdraw(amount)
                }
            }
            TransactionKind::ServiceCharge => {
                let charge = account.service_charges_at(today);
                tracing::debug!(account = record.account, %charge, "applying service charge");
                account.withdraw(charge)
            }
        }
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the engine and return the store
    pub fn into_store(self) -> S {
        self.store
    }
}
