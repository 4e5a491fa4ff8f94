//! End-to-end batch run
//!
//! Loads holders and accounts, applies every transaction record in file order,
//! writes the final account report, then hands the delivered alerts to an
//! alerts file or the log.

use crate::core::{
    AccountStore, AlertOutbox, Clock, EveryWithdrawal, FixedClock, NotificationPolicy,
    SystemClock, ThresholdPolicy, TransactionEngine,
};
use crate::io::{load_bank, read_transactions, write_accounts_csv, write_alerts_csv};
use crate::types::AccountError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Which transactions alert account holders
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationRule {
    /// Large transactions and crossings into penalty territory
    Threshold { large_transaction: Decimal },

    /// Every successful withdrawal
    EveryWithdrawal,
}

impl NotificationRule {
    pub fn policy(&self) -> Arc<dyn NotificationPolicy> {
        match self {
            NotificationRule::Threshold { large_transaction } => {
                Arc::new(ThresholdPolicy::new(*large_transaction))
            }
            NotificationRule::EveryWithdrawal => Arc::new(EveryWithdrawal),
        }
    }
}

/// Everything a run needs
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub clients: PathBuf,
    pub accounts: PathBuf,
    pub transactions: PathBuf,

    /// Evaluation date; `None` means the system clock
    pub as_of: Option<NaiveDate>,

    pub notification: NotificationRule,

    /// Alerts CSV destination; `None` logs alerts instead
    pub alerts: Option<PathBuf>,
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: usize,
    pub rejected: usize,
    pub alerts: usize,
}

/// Run the batch described by `config`, writing the account report to `output`
///
/// Rejected transactions are logged and counted, never fatal.
///
/// # Errors
///
/// Returns an error if an input file cannot be opened, or if the report or
/// alerts file cannot be written.
pub fn run(config: &RunConfig, output: &mut dyn Write) -> Result<RunSummary, AccountError> {
    let clock: Arc<dyn Clock> = match config.as_of {
        Some(date) => Arc::new(FixedClock::on(date)),
        None => Arc::new(SystemClock),
    };
    let outbox = Arc::new(AlertOutbox::new());

    let bank = load_bank(
        &config.clients,
        &config.accounts,
        outbox.clone(),
        Arc::clone(&clock),
        config.notification.policy(),
    )?;
    let mut engine = TransactionEngine::new(bank).with_clock(Arc::clone(&clock));

    let mut summary = RunSummary::default();
    for record in read_transactions(&config.transactions)? {
        let (kind, account) = (record.kind, record.account);
        match engine.process(record) {
            Ok(()) => summary.applied += 1,
            Err(e) => {
                summary.rejected += 1;
                tracing::warn!(kind = kind.label(), account, error = %e, "transaction rejected");
            }
        }
    }

    write_accounts_csv(&engine.store().accounts(), clock.today(), output)?;

    let alerts = outbox.drain();
    summary.alerts = alerts.len();
    match &config.alerts {
        Some(path) => {
            let mut file = BufWriter::new(File::create(path)?);
            write_alerts_csv(&alerts, &mut file)?;
            file.flush()?;
        }
        None => {
            for alert in &alerts {
                tracing::info!(subject = %alert.subject, body = %alert.body, "alert delivered");
            }
        }
    }

    tracing::info!(
        applied = summary.applied,
        rejected = summary.rejected,
        alerts = summary.alerts,
        "run complete"
    );
    Ok(summary)
}
