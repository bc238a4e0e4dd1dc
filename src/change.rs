// 🔄 ChangeCalculator - Greedy constrained coin change
// Works on a copy of the reserve counts; the aggregate applies the result

use crate::coin::Coin;
use crate::error::VendingError;
use crate::inventory::CoinReserve;
use crate::money::Money;

/// Computes the coins to return for an overpayment, constrained by what the
/// reserve actually holds.
///
/// Greedy largest-denomination-first. Not optimal for arbitrary denomination
/// sets, but exact for {5, 10, 25, 100} under any reserve level; a change to
/// the denomination set would call for a dynamic-programming variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeCalculator;

impl ChangeCalculator {
    pub fn new() -> Self {
        ChangeCalculator
    }

    /// Calculate the change owed for `inserted` against `price`.
    ///
    /// Returns an empty sequence when there is no overpayment. Otherwise
    /// returns the dispensed coins largest to smallest, or
    /// `InsufficientChange` when the reserve cannot cover the exact amount.
    /// The real reserve is never mutated here.
    pub fn calculate(
        &self,
        inserted: Money,
        price: Money,
        reserve: &CoinReserve,
    ) -> Result<Vec<Coin>, VendingError> {
        if inserted <= price {
            return Ok(Vec::new());
        }

        // Signed intermediate on raw cents; Money stays non-negative
        let mut remaining = inserted.cents() - price.cents();
        let owed = remaining;

        let mut change = Vec::new();
        for coin in Coin::DESCENDING {
            let mut available = reserve.count(coin);
            while remaining >= coin.cents() && available > 0 {
                change.push(coin);
                remaining -= coin.cents();
                available -= 1;
            }
        }

        if remaining == 0 {
            Ok(change)
        } else {
            Err(VendingError::InsufficientChange(
                Money::from_cents(owed)?,
            ))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
