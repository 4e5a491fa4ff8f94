//! Bank Accounts Library
//! # Overview
//!
//! This library models bank accounts with type-specific service charges and
//! alerts account holders about significant transactions.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (errors, money, transaction records and events)
//! - [`strategy`] - Service-charge rules, one per account type
//! - [`core`] - Business logic components:
//!   - [`core::account`] - Accounts, deposits, withdrawals and summaries
//!   - [`core::holder`] - Account holders, notified as observers
//!   - [`core::notifier`] - Ordered observer list owned by each account
//!   - [`core::policy`] - Which transactions are worth an alert
//!   - [`core::bank`] - Registry of holders and accounts
//!   - [`core::engine`] - Transaction processing orchestration
//! - [`io`] - CSV loading and reporting
//! - [`cli`] - CLI arguments parsing
//! - [`pipeline`] - The batch run behind the binary
//!
//! # Account Types
//!
//! - **Chequing**: 0.50 per period, plus interest on any shortfall below the
//!   overdraft limit
//! - **Savings**: 0.50 per period, doubled while below the minimum balance
//! - **Investment**: 2.55 per period plus a management fee, waived once the
//!   account is more than ten years old
//!
//! # Notifications
//!
//! Each account keeps an ordered list of observers (normally its holder).
//! After a successful deposit or withdrawal the account's notification policy
//! decides whether the observers are told; each holder turns the message into
//! an alert for its alert sink.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod strategy;
pub mod types;

pub use core::{Account, AccountKind, Bank, Holder, TransactionEngine};
pub use io::write_accounts_csv;
pub use pipeline::{run, RunConfig};
pub use types::{AccountError, AccountNumber, ClientNumber, TransactionKind, TransactionRecord};
