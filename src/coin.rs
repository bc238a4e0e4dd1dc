// 🪙 Coin - The fixed denomination set the machine accepts and dispenses
// Coins are fungible: only the denomination matters, so one enum serves as
// both a concrete inserted coin and a reserve key

use crate::error::VendingError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A valid coin denomination: 5, 10, 25 or 100 cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Coin {
    FiveCents,
    TenCents,
    TwentyFiveCents,
    OneEuro,
}

impl Coin {
    /// All denominations, largest first — the order the greedy change
    /// algorithm consumes them in.
    pub const DESCENDING: [Coin; 4] = [
        Coin::OneEuro,
        Coin::TwentyFiveCents,
        Coin::TenCents,
        Coin::FiveCents,
    ];

    /// Face value in cents.
    pub fn cents(&self) -> i64 {
        match self {
            Coin::FiveCents => 5,
            Coin::TenCents => 10,
            Coin::TwentyFiveCents => 25,
            Coin::OneEuro => 100,
        }
    }

    /// Face value as Money.
    pub fn value(&self) -> Money {
        // A coin's face value is always a valid non-negative amount
        Money::from_cents(self.cents()).unwrap_or_else(|_| Money::zero())
    }

    /// Parse from a cent count. Fails with `InvalidDenomination` for any
    /// value outside the accepted set.
    pub fn from_cents(cents: i64) -> Result<Self, VendingError> {
        match cents {
            5 => Ok(Coin::FiveCents),
            10 => Ok(Coin::TenCents),
            25 => Ok(Coin::TwentyFiveCents),
            100 => Ok(Coin::OneEuro),
            _ => Err(VendingError::InvalidDenomination(cents as f64 / 100.0)),
        }
    }

    /// Parse from a decimal value (0.05, 0.10, 0.25, 1.00).
    pub fn from_decimal(value: f64) -> Result<Self, VendingError> {
        let cents = (value * 100.0).round() as i64;
        Self::from_cents(cents).map_err(|_| VendingError::InvalidDenomination(value))
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_decimal_values() {
        assert_eq!(Coin::from_decimal(0.05).unwrap(), Coin::FiveCents);
        assert_eq!(Coin::from_decimal(0.10).unwrap(), Coin::TenCents);
        assert_eq!(Coin::from_decimal(0.25).unwrap(), Coin::TwentyFiveCents);
        assert_eq!(Coin::from_decimal(1.00).unwrap(), Coin::OneEuro);
    }

    #[test]
    fn test_value_round_trips() {
        for value in [0.05, 0.10, 0.25, 1.00] {
            let coin = Coin::from_decimal(value).unwrap();
            assert!((coin.value().to_decimal() - value).abs() < 1e-9);
        }
    }

    #[test]
    fn test_invalid_denominations_rejected() {
        for value in [0.01, 0.02, 0.20, 0.50, 2.00, 0.0] {
            assert_eq!(
                Coin::from_decimal(value),
                Err(VendingError::InvalidDenomination(value))
            );
        }
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(Coin::from_cents(25).unwrap(), Coin::TwentyFiveCents);
        assert!(matches!(
            Coin::from_cents(50),
            Err(VendingError::InvalidDenomination(_))
        ));
    }

    #[test]
    fn test_descending_order() {
        let cents: Vec<i64> = Coin::DESCENDING.iter().map(|c| c.cents()).collect();
        assert_eq!(cents, vec![100, 25, 10, 5]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coin::TwentyFiveCents.to_string(), "0.25 €");
    }
}
