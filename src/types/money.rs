//! Money helpers
//!
//! Balances, limits and charges are `Decimal`s throughout. This module covers the
//! two places where money crosses a boundary:
//!
//! - [`AmountInput`] reads caller-supplied amounts that may not be numeric at all
//!   (text from a form or a CSV cell, floats from a script).
//! - [`Currency`] renders an amount the way account summaries show it:
//!   dollar sign, thousands separators and two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// A caller-supplied amount that may or may not be numeric
///
/// Deposits and withdrawals accept anything implementing this trait. A value
/// that yields `None` from [`AmountInput::to_decimal`] is treated as
/// non-numeric: `update_balance` ignores it and `deposit`/`withdraw` reject it.
pub trait AmountInput {
    /// The amount as a finite decimal, or `None` if it cannot be read as one
    fn to_decimal(&self) -> Option<Decimal>;

    /// The amount as the caller wrote it, for error messages
    fn describe(&self) -> String;
}

impl AmountInput for Decimal {
    fn to_decimal(&self) -> Option<Decimal> {
        Some(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl AmountInput for &str {
    fn to_decimal(&self) -> Option<Decimal> {
        parse_decimal(self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl AmountInput for String {
    fn to_decimal(&self) -> Option<Decimal> {
        parse_decimal(self)
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl AmountInput for f64 {
    fn to_decimal(&self) -> Option<Decimal> {
        // NaN and infinities have no decimal form
        Decimal::try_from(*self).ok()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

macro_rules! integer_amount_input {
    ($($ty:ty),*) => {
        $(
            impl AmountInput for $ty {
                fn to_decimal(&self) -> Option<Decimal> {
                    Some(Decimal::from(*self))
                }

                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_amount_input!(i32, i64, u32, u64);

/// Parse trimmed text as a decimal, accepting plain and scientific notation
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Display adapter rendering an amount as `$1,234.56`
///
/// Negative amounts keep the sign after the dollar sign (`$-100.00`), matching
/// the account summaries this library has always produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Currency(pub Decimal);

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = format!("{:.2}", rounded.abs());
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        write!(f, "${}{}.{}", sign, group_thousands(whole), fraction)
    }
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
