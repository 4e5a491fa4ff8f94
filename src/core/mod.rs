//! Core business logic module
//!
//! This module contains the account model and its collaborators:
//! - `traits` - Seams for observers, alert sinks, notification policies and stores
//! - `account` - Accounts and their variants
//! - `holder` - Account holders, the observers accounts notify
//! - `notifier` - Ordered observer list owned by each account
//! - `policy` - Rules deciding which transactions notify holders
//! - `alert` - In-memory alert sink
//! - `clock` - Injectable source of the current date and time
//! - `bank` - Registry of holders and accounts
//! - `engine` - Transaction processing orchestration

pub mod account;
pub mod alert;
pub mod bank;
pub mod clock;
pub mod engine;
pub mod holder;
pub mod notifier;
pub mod policy;
pub mod traits;

pub use account::{Account, AccountKind, AccountSummary};
pub use alert::{Alert, AlertOutbox};
pub use bank::Bank;
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::TransactionEngine;
pub use holder::{Holder, INVALID_EMAIL};
pub use notifier::Notifier;
pub use policy::{EveryWithdrawal, ThresholdPolicy, DEFAULT_LARGE_TRANSACTION};
pub use traits::{AccountStore, AlertSink, NotificationPolicy, Observer};
