//! Savings accounts: minimum-balance service charges

use super::{ServiceChargeStrategy, BASE_SERVICE_CHARGE, SERVICE_CHARGE_PREMIUM};
use crate::types::AmountInput;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Minimum balance used when the supplied one is not numeric (50.00)
pub const DEFAULT_MINIMUM_BALANCE: Decimal = Decimal::from_parts(5000, 0, 0, false, 2);

/// Savings terms and their charge rule
///
/// The minimum balance is both the charge-free line and the withdrawal floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumBalanceStrategy {
    minimum_balance: Decimal,
}

impl MinimumBalanceStrategy {
    /// Build Savings terms, substituting the default for a non-numeric value
    pub fn new(minimum_balance: impl AmountInput) -> Self {
        MinimumBalanceStrategy {
            minimum_balance: minimum_balance
                .to_decimal()
                .unwrap_or(DEFAULT_MINIMUM_BALANCE),
        }
    }

    pub fn minimum_balance(&self) -> Decimal {
        self.minimum_balance
    }
}

impl Default for MinimumBalanceStrategy {
    fn default() -> Self {
        MinimumBalanceStrategy {
            minimum_balance: DEFAULT_MINIMUM_BALANCE,
        }
    }
}

impl ServiceChargeStrategy for MinimumBalanceStrategy {
    fn calculate_service_charges(&self, balance: Decimal, _today: NaiveDate) -> Decimal {
        if balance >= self.minimum_balance {
            BASE_SERVICE_CHARGE
        } else {
            BASE_SERVICE_CHARGE * SERVICE_CHARGE_PREMIUM
        }
    }
}
