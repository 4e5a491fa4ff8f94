//! Bank Accounts CLI
//!
//! Command-line interface for applying CSV transactions to bank accounts.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- clients.csv accounts.csv transactions.csv > report.csv
//! cargo run -- --as-of 2024-06-01 clients.csv accounts.csv transactions.csv > report.csv
//! cargo run -- --notify every-withdrawal --alerts alerts.csv clients.csv accounts.csv transactions.csv
//! ```
//!
//! The program loads holders and accounts, applies each transaction in file
//! order, and writes every account's balance and current service charges to
//! stdout. Logs go to stderr; `RUST_LOG` overrides `--log-level`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not writable, etc.)

use bank_accounts::{cli, pipeline};
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let args = cli::parse_args();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = args.to_run_config();

    let mut output = std::io::stdout();
    if let Err(e) = pipeline::run(&config, &mut output) {
        tracing::error!(error = %e, "run failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
