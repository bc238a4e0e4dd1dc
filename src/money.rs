// 💶 Money - Exact monetary values as integer cents
// No floats in arithmetic: decimals exist only at the intake/display boundary

use crate::error::VendingError;
use serde::{Deserialize, Serialize};
use std::fmt;

const CURRENCY_CODE: &str = "EUR";
const CURRENCY_SYMBOL: &str = "€";

/// Immutable monetary value in minor units (cents).
///
/// Invariant: never negative. Arithmetic that could underflow returns a
/// `Result` instead of constructing an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Create from an exact cent count. Fails on negative input.
    pub fn from_cents(cents: i64) -> Result<Self, VendingError> {
        if cents < 0 {
            return Err(VendingError::InvalidAmount(cents));
        }
        Ok(Money { cents })
    }

    /// Create from a decimal amount (e.g. `0.65`).
    ///
    /// Rounds to the nearest cent, half away from zero, then rejects
    /// negative results.
    pub fn from_decimal(amount: f64) -> Result<Self, VendingError> {
        let cents = (amount * 100.0).round() as i64;
        Self::from_cents(cents)
    }

    pub fn zero() -> Self {
        Money { cents: 0 }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Addition cannot underflow, so it stays infallible.
    pub fn add(self, other: Money) -> Money {
        Money {
            cents: self.cents + other.cents,
        }
    }

    /// Subtraction fails if the result would be negative.
    ///
    /// Change math that needs a signed intermediate works on raw cents
    /// instead of going through this constructor.
    pub fn subtract(self, other: Money) -> Result<Money, VendingError> {
        Self::from_cents(self.cents - other.cents)
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    pub fn currency_code(&self) -> &'static str {
        CURRENCY_CODE
    }
}

impl fmt::Display for Money {
    /// Two decimal places, symbol after the amount: `"0.65 €"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.to_decimal(), CURRENCY_SYMBOL)
    }
}

// ============================================================================
// TESTS
// ============================================================================
