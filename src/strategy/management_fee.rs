//! Investment accounts: management-fee service charges

use super::{ServiceChargeStrategy, FEE_WAIVER_DAYS, INVESTMENT_BASE_SERVICE_CHARGE};
use crate::types::AmountInput;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Investment terms and their charge rule
///
/// The management fee is added to the base charge until the account is more
/// than [`FEE_WAIVER_DAYS`] old, after which it is waived. Elapsed time is the
/// only input; the balance does not matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManagementFeeStrategy {
    management_fee: Decimal,
    date_created: NaiveDate,
}

impl ManagementFeeStrategy {
    /// Build Investment terms
    ///
    /// A non-numeric management fee is replaced by the Investment base charge.
    pub fn new(date_created: NaiveDate, management_fee: impl AmountInput) -> Self {
        ManagementFeeStrategy {
            management_fee: management_fee
                .to_decimal()
                .unwrap_or(INVESTMENT_BASE_SERVICE_CHARGE),
            date_created,
        }
    }

    pub fn management_fee(&self) -> Decimal {
        self.management_fee
    }

    pub fn date_created(&self) -> NaiveDate {
        self.date_created
    }

    /// Whether the account is old enough on `today` to have its fee waived
    pub fn is_fee_waived(&self, today: NaiveDate) -> bool {
        (today - self.date_created).num_days() > FEE_WAIVER_DAYS
    }
}

impl ServiceChargeStrategy for ManagementFeeStrategy {
    fn calculate_service_charges(&self, _balance: Decimal, today: NaiveDate) -> Decimal {
        if self.is_fee_waived(today) {
            INVESTMENT_BASE_SERVICE_CHARGE
        } else {
            INVESTMENT_BASE_SERVICE_CHARGE
                .checked_add(self.management_fee)
                .unwrap_or(Decimal::MAX)
        }
    }
}
