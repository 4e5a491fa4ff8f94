//! Chequing accounts: overdraft-based service charges

use super::{ServiceChargeStrategy, BASE_SERVICE_CHARGE};
use crate::types::AmountInput;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Overdraft limit used when the supplied one is not numeric (-100.00)
pub const DEFAULT_OVERDRAFT_LIMIT: Decimal = Decimal::from_parts(10000, 0, 0, true, 2);

/// Overdraft rate used when the supplied one is not numeric (5%)
pub const DEFAULT_OVERDRAFT_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Chequing terms and their charge rule
///
/// Within the limit (balance at or above `overdraft_limit`) only the base
/// charge applies. Below it, the shortfall is charged at `overdraft_rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverdraftStrategy {
    overdraft_limit: Decimal,
    overdraft_rate: Decimal,
}

impl OverdraftStrategy {
    /// Build Chequing terms, substituting defaults for non-numeric values
    pub fn new(overdraft_limit: impl AmountInput, overdraft_rate: impl AmountInput) -> Self {
        OverdraftStrategy {
            overdraft_limit: overdraft_limit
                .to_decimal()
                .unwrap_or(DEFAULT_OVERDRAFT_LIMIT),
            overdraft_rate: overdraft_rate.to_decimal().unwrap_or(DEFAULT_OVERDRAFT_RATE),
        }
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }

    pub fn overdraft_rate(&self) -> Decimal {
        self.overdraft_rate
    }

    /// Lowest balance a withdrawal may leave behind
    ///
    /// A negative limit is the overdraft the account may run; a positive one
    /// only moves the charge-free line, so the floor stays at zero.
    pub fn withdrawal_floor(&self) -> Decimal {
        self.overdraft_limit.min(Decimal::ZERO)
    }
}

impl Default for OverdraftStrategy {
    fn default() -> Self {
        OverdraftStrategy {
            overdraft_limit: DEFAULT_OVERDRAFT_LIMIT,
            overdraft_rate: DEFAULT_OVERDRAFT_RATE,
        }
    }
}

impl ServiceChargeStrategy for OverdraftStrategy {
    fn calculate_service_charges(&self, balance: Decimal, _today: NaiveDate) -> Decimal {
        if balance >= self.overdraft_limit {
            return BASE_SERVICE_CHARGE;
        }
        self.overdraft_limit
            .checked_sub(balance)
            .and_then(|shortfall| shortfall.checked_mul(self.overdraft_rate))
            .and_then(|penalty| BASE_SERVICE_CHARGE.checked_add(penalty))
            .unwrap_or(Decimal::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[rstest]
    // 0.50 + (50.00 - 30.00) * 0.05
    #[case::below_limit(Decimal::new(3000, 2), Decimal::new(150, 2))]
    #[case::at_limit(Decimal::new(5000, 2), Decimal::new(50, 2))]
    #[case::one_below_limit(Decimal::new(4900, 2), Decimal::new(55, 2))]
    #[case::above_limit(Decimal::new(10000, 2), Decimal::new(50, 2))]
    #[case::overdrawn(Decimal::new(-5000, 2), Decimal::new(550, 2))]
    fn test_charges_with_positive_limit(#[case] balance: Decimal, #[case] expected: Decimal) {
        let strategy = OverdraftStrategy::new(Decimal::new(5000, 2), Decimal::new(5, 2));
        assert_eq!(strategy.calculate_service_charges(balance, today()), expected);
    }

    #[rstest]
    #[case::positive_balance(Decimal::new(2000, 2), Decimal::new(50, 2))]
    #[case::at_default_limit(Decimal::new(-10000, 2), Decimal::new(50, 2))]
    // 0.50 + (-100.00 - -120.00) * 0.05
    #[case::beyond_default_limit(Decimal::new(-12000, 2), Decimal::new(150, 2))]
    fn test_charges_with_default_terms(#[case] balance: Decimal, #[case] expected: Decimal) {
        let strategy = OverdraftStrategy::default();
        assert_eq!(strategy.calculate_service_charges(balance, today()), expected);
    }

    #[rstest]
    #[case::non_numeric_limit("abc", "0.10", DEFAULT_OVERDRAFT_LIMIT, Decimal::new(10, 2))]
    #[case::non_numeric_rate("-250", "xyz", Decimal::new(-250, 0), DEFAULT_OVERDRAFT_RATE)]
    #[case::both_invalid("", "", DEFAULT_OVERDRAFT_LIMIT, DEFAULT_OVERDRAFT_RATE)]
    fn test_invalid_terms_fall_back_to_defaults(
        #[case] limit: &str,
        #[case] rate: &str,
        #[case] expected_limit: Decimal,
        #[case] expected_rate: Decimal,
    ) {
        let strategy = OverdraftStrategy::new(limit, rate);
        assert_eq!(strategy.overdraft_limit(), expected_limit);
        assert_eq!(strategy.overdraft_rate(), expected_rate);
    }

    #[rstest]
    #[case::shortfall_overflows(Decimal::new(5000, 2), Decimal::new(5, 2), Decimal::MIN)]
    #[case::penalty_overflows(Decimal::ZERO, Decimal::MAX, Decimal::new(-2, 0))]
    fn test_overflowing_charge_saturates(
        #[case] limit: Decimal,
        #[case] rate: Decimal,
        #[case] balance: Decimal,
    ) {
        let strategy = OverdraftStrategy::new(limit, rate);
        assert_eq!(strategy.calculate_service_charges(balance, today()), Decimal::MAX);
    }

    #[rstest]
    #[case::negative_limit(Decimal::new(-10000, 2), Decimal::new(-10000, 2))]
    #[case::positive_limit(Decimal::new(5000, 2), Decimal::ZERO)]
    #[case::zero_limit(Decimal::ZERO, Decimal::ZERO)]
    fn test_withdrawal_floor(#[case] limit: Decimal, #[case] expected: Decimal) {
        let strategy = OverdraftStrategy::new(limit, Decimal::new(5, 2));
        assert_eq!(strategy.withdrawal_floor(), expected);
    }
}
