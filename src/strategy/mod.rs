//! Service-charge strategies
//!
//! Every account variant carries one strategy value that computes its periodic
//! service charge from the current balance and the evaluation date. Callers
//! never need to know which variant they hold: `Account::service_charges`
//! dispatches to the variant's strategy.
//!
//! | Variant    | Strategy                   | Rule                                                         |
//! |------------|----------------------------|--------------------------------------------------------------|
//! | Chequing   | [`OverdraftStrategy`]      | base, plus `(limit - balance) * rate` when below the limit    |
//! | Savings    | [`MinimumBalanceStrategy`] | base, doubled when below the minimum balance                 |
//! | Investment | [`ManagementFeeStrategy`]  | base plus management fee, fee waived after ten years         |
//!
//! Charges are a pure function of state: nothing is accumulated, and the
//! caller applies a charge by withdrawing it.

use chrono::NaiveDate;
use rust_decimal::Decimal;

pub mod management_fee;
pub mod minimum_balance;
pub mod overdraft;

pub use management_fee::ManagementFeeStrategy;
pub use minimum_balance::MinimumBalanceStrategy;
pub use overdraft::OverdraftStrategy;

/// Base charge for Chequing and Savings accounts (0.50)
pub const BASE_SERVICE_CHARGE: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Multiplier applied to the Savings base charge below the minimum balance (2.00)
pub const SERVICE_CHARGE_PREMIUM: Decimal = Decimal::from_parts(200, 0, 0, false, 2);

/// Base charge for Investment accounts (2.55)
pub const INVESTMENT_BASE_SERVICE_CHARGE: Decimal = Decimal::from_parts(255, 0, 0, false, 2);

/// Account age, in days, after which the Investment management fee is waived
pub const FEE_WAIVER_DAYS: i64 = 365 * 10;

/// Service-charge computation for one account variant
pub trait ServiceChargeStrategy {
    /// Compute the charge for an account holding `balance`, evaluated on `today`
    ///
    /// A charge too large to represent saturates at `Decimal::MAX`.
    fn calculate_service_charges(&self, balance: Decimal, today: NaiveDate) -> Decimal;
}
