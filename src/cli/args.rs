use crate::core::DEFAULT_LARGE_TRANSACTION;
use crate::pipeline::{NotificationRule, RunConfig};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Apply transactions to bank accounts and report balances and service charges
#[derive(Parser, Debug)]
#[command(name = "bank-accounts")]
#[command(
    about = "Apply transactions to bank accounts and report balances and service charges",
    long_about = None
)]
pub struct CliArgs {
    /// CSV file of account holders
    #[arg(value_name = "CLIENTS", help = "Path to the clients CSV file")]
    pub clients_file: PathBuf,

    /// CSV file of accounts
    #[arg(value_name = "ACCOUNTS", help = "Path to the accounts CSV file")]
    pub accounts_file: PathBuf,

    /// CSV file of transactions to apply, in order
    #[arg(value_name = "TRANSACTIONS", help = "Path to the transactions CSV file")]
    pub transactions_file: PathBuf,

    /// Date on which service charges are evaluated
    #[arg(
        long = "as-of",
        value_name = "DATE",
        help = "Evaluation date for service charges, YYYY-MM-DD (default: today)"
    )]
    pub as_of: Option<NaiveDate>,

    /// Amount at or above which any transaction alerts the holder
    #[arg(
        long = "large-transaction",
        value_name = "AMOUNT",
        help = "Transaction amount that always alerts the holder (default: 10000.00)"
    )]
    pub large_transaction: Option<Decimal>,

    /// Rule deciding which transactions alert the holder
    #[arg(
        long = "notify",
        value_name = "POLICY",
        default_value = "threshold",
        help = "Alert policy: 'threshold' or 'every-withdrawal'"
    )]
    pub notify: NotifyPolicyType,

    /// Where to write delivered alerts
    #[arg(
        long = "alerts",
        value_name = "PATH",
        help = "Write delivered alerts to this CSV file instead of the log"
    )]
    pub alerts_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level when RUST_LOG is unset (error, warn, info, debug, trace)"
    )]
    pub log_level: String,
}

/// Available alert policies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NotifyPolicyType {
    Threshold,
    EveryWithdrawal,
}

impl CliArgs {
    /// Create a RunConfig from CLI arguments
    ///
    /// A large-transaction amount that is not strictly positive falls back to
    /// the default, with a warning.
    pub fn to_run_config(&self) -> RunConfig {
        let notification = match self.notify {
            NotifyPolicyType::EveryWithdrawal => NotificationRule::EveryWithdrawal,
            NotifyPolicyType::Threshold => {
                let large_transaction = match self.large_transaction {
                    Some(amount) if amount > Decimal::ZERO => amount,
                    Some(amount) => {
                        tracing::warn!(
                            %amount,
                            default = %DEFAULT_LARGE_TRANSACTION,
                            "large transaction amount must be positive, using default"
                        );
                        DEFAULT_LARGE_TRANSACTION
                    }
                    None => DEFAULT_LARGE_TRANSACTION,
                };
                NotificationRule::Threshold { large_transaction }
            }
        };

        RunConfig {
            clients: self.clients_file.clone(),
            accounts: self.accounts_file.clone(),
            transactions: self.transactions_file.clone(),
            as_of: self.as_of,
            notification,
            alerts: self.alerts_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const FILES: [&str; 4] = ["program", "clients.csv", "accounts.csv", "transactions.csv"];

    fn parse(options: &[&str]) -> CliArgs {
        let args: Vec<&str> = FILES.iter().chain(options).copied().collect();
        CliArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_positional_files() {
        let parsed = parse(&[]);
        assert_eq!(parsed.clients_file, PathBuf::from("clients.csv"));
        assert_eq!(parsed.accounts_file, PathBuf::from("accounts.csv"));
        assert_eq!(parsed.transactions_file, PathBuf::from("transactions.csv"));
        assert_eq!(parsed.as_of, None);
        assert_eq!(parsed.alerts_file, None);
        assert_eq!(parsed.log_level, "warn");
    }

    #[rstest]
    #[case::default_policy(&[], NotifyPolicyType::Threshold)]
    #[case::explicit_threshold(&["--notify", "threshold"], NotifyPolicyType::Threshold)]
    #[case::every_withdrawal(&["--notify", "every-withdrawal"], NotifyPolicyType::EveryWithdrawal)]
    fn test_policy_parsing(#[case] options: &[&str], #[case] expected: NotifyPolicyType) {
        assert_eq!(parse(options).notify, expected);
    }

    #[test]
    fn test_as_of_parsing() {
        let parsed = parse(&["--as-of", "2024-06-01", "--alerts", "alerts.csv"]);
        assert_eq!(parsed.as_of, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(parsed.alerts_file, Some(PathBuf::from("alerts.csv")));
    }

    #[rstest]
    #[case::default(&[], Decimal::new(1_000_000, 2))]
    #[case::custom(&["--large-transaction", "500"], Decimal::from(500))]
    #[case::zero_falls_back(&["--large-transaction", "0"], Decimal::new(1_000_000, 2))]
    #[case::negative_falls_back(&["--large-transaction=-5"], Decimal::new(1_000_000, 2))]
    fn test_run_config_threshold(#[case] options: &[&str], #[case] expected: Decimal) {
        let config = parse(options).to_run_config();
        assert_eq!(
            config.notification,
            NotificationRule::Threshold {
                large_transaction: expected
            }
        );
    }

    #[test]
    fn test_run_config_every_withdrawal() {
        let config = parse(&["--notify", "every-withdrawal"]).to_run_config();
        assert_eq!(config.notification, NotificationRule::EveryWithdrawal);
        assert_eq!(config.transactions, PathBuf::from("transactions.csv"));
    }

    #[rstest]
    #[case::missing_files(&["program", "clients.csv"])]
    #[case::invalid_policy(&["program", "a.csv", "b.csv", "c.csv", "--notify", "never"])]
    #[case::invalid_date(&["program", "a.csv", "b.csv", "c.csv", "--as-of", "June 1st"])]
    #[case::invalid_amount(&["program", "a.csv", "b.csv", "c.csv", "--large-transaction", "lots"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
