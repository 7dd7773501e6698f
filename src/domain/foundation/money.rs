//! Monetary amounts.
//!
//! All money is stored as integer cents (`i64`), never floats. Prices and
//! payment amounts must be strictly positive; account balances may be zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

use super::ValidationError;

/// A monetary amount in integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Zero, the identity for aggregation.
    pub const ZERO: Amount = Amount(0);

    /// Creates a strictly positive amount (prices, payments, expenses).
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when `cents <= 0`.
    pub fn positive(field: &str, cents: i64) -> Result<Self, ValidationError> {
        if cents <= 0 {
            return Err(ValidationError::out_of_range(field, 1, i64::MAX, cents));
        }
        Ok(Amount(cents))
    }

    /// Creates a non-negative amount (pending balances).
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when `cents < 0`.
    pub fn non_negative(field: &str, cents: i64) -> Result<Self, ValidationError> {
        if cents < 0 {
            return Err(ValidationError::out_of_range(field, 0, i64::MAX, cents));
        }
        Ok(Amount(cents))
    }

    /// Returns the amount in cents.
    pub fn as_cents(&self) -> i64 {
        self.0
    }

    /// Formats the amount for display, e.g. `$1,234.56`.
    pub fn formatted(&self) -> String {
        let negative = self.0 < 0;
        let cents = self.0.unsigned_abs();
        let whole = cents / 100;
        let frac = cents % 100;

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        let sign = if negative { "-" } else { "" };
        format!("{}${}.{:02}", sign, grouped, frac)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        Amount(iter.map(|a| a.0).sum())
    }
}
