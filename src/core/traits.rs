//! Core traits for notification, alert delivery and account storage
//!
//! These are the seams between the account model and its collaborators:
//! observers that react to transactions, the sink that delivers alerts, the
//! policy that decides which transactions are worth an alert, and the store
//! that hands accounts to callers and takes them back after mutation.

use crate::core::account::Account;
use crate::core::holder::Holder;
use crate::types::{AccountNumber, ClientNumber, TransactionEvent};
use std::sync::Arc;

/// Receiver of account notifications
///
/// Observers are shared (`Arc`) between every account they are attached to,
/// so `update` takes `&self`.
pub trait Observer: Send + Sync {
    /// Called once per notification, in attachment order
    fn update(&self, message: &str);
}

/// External alert-delivery collaborator
///
/// Delivery is best-effort: there is no return value and no retry. Sinks
/// that can fail are expected to report their own failures.
pub trait AlertSink: Send + Sync {
    /// Deliver one alert
    fn send(&self, subject: &str, body: &str);
}

/// Decides whether an applied transaction should notify the account's observers
pub trait NotificationPolicy: Send + Sync {
    /// Called after the balance change has been applied
    fn should_notify(&self, event: &TransactionEvent) -> bool;
}

/// Persistence collaborator for accounts and holders
///
/// Supplies accounts by number and holders by client number, and takes
/// accounts back after mutation.
pub trait AccountStore {
    /// Look up an account
    fn account(&self, account_number: AccountNumber) -> Option<&Account>;

    /// Look up an account for mutation
    fn account_mut(&mut self, account_number: AccountNumber) -> Option<&mut Account>;

    /// Insert or replace an account, keyed by its account number
    fn save(&mut self, account: Account);

    /// Look up a holder
    fn holder(&self, client_number: ClientNumber) -> Option<Arc<Holder>>;

    /// All accounts, sorted by account number
    fn accounts(&self) -> Vec<&Account>;
}
