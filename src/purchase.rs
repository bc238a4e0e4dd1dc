// 🛒 PurchaseProcessor - Funds/stock validation + change orchestration
// Stateless: reads the machine's state, mutates nothing, returns an outcome
// the aggregate applies atomically

use crate::change::ChangeCalculator;
use crate::coin::Coin;
use crate::error::VendingError;
use crate::inventory::{CoinReserve, Inventory};
use crate::money::Money;
use crate::product::Product;

// ============================================================================
// PURCHASE OUTCOME
// ============================================================================

/// Result of a validated purchase: the product to dispense and the change
/// coins to return (possibly none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOutcome {
    product: Product,
    change_coins: Vec<Coin>,
}

impl PurchaseOutcome {
    pub fn new(product: Product, change_coins: Vec<Coin>) -> Self {
        PurchaseOutcome {
            product,
            change_coins,
        }
    }

    pub fn product(&self) -> Product {
        self.product
    }

    pub fn change_coins(&self) -> &[Coin] {
        &self.change_coins
    }

    pub fn has_change(&self) -> bool {
        !self.change_coins.is_empty()
    }
}

// ============================================================================
// PURCHASE PROCESSOR
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseProcessor {
    calculator: ChangeCalculator,
}

impl PurchaseProcessor {
    pub fn new() -> Self {
        PurchaseProcessor {
            calculator: ChangeCalculator::new(),
        }
    }

    /// Validate a purchase attempt and work out the change owed.
    ///
    /// Checks funds, then stock, then delegates to the change calculator.
    /// Any error means nothing may be applied: inventory and reserve are
    /// decremented by the aggregate only on a successful outcome.
    pub fn process(
        &self,
        inserted_coins: &[Coin],
        available_products: &Inventory,
        available_change: &CoinReserve,
        selected_product: Product,
    ) -> Result<PurchaseOutcome, VendingError> {
        let inserted = sum_coins(inserted_coins);
        let price = selected_product.price();

        if inserted < price {
            return Err(VendingError::InsufficientFunds {
                inserted,
                required: price,
            });
        }

        if !available_products.is_in_stock(selected_product) {
            return Err(VendingError::ProductOutOfStock(
                selected_product.name().to_string(),
            ));
        }

        let change_coins = self
            .calculator
            .calculate(inserted, price, available_change)?;

        Ok(PurchaseOutcome::new(selected_product, change_coins))
    }
}

/// Sum a coin sequence into a single amount.
pub fn sum_coins(coins: &[Coin]) -> Money {
    coins
        .iter()
        .fold(Money::zero(), |total, coin| total.add(coin.value()))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_coins() {
        let coins = [Coin::OneEuro, Coin::TwentyFiveCents, Coin::TenCents];
        assert_eq!(sum_coins(&coins).cents(), 135);
        assert_eq!(sum_coins(&[]).cents(), 0);
    }

    #[test]
    fn test_successful_purchase_with_change() {
        let processor = PurchaseProcessor::new();
        let outcome = processor
            .process(
                &[Coin::OneEuro],
                &Inventory::with_defaults(),
                &CoinReserve::with_defaults(),
                Product::Water,
            )
            .unwrap();

        assert_eq!(outcome.product(), Product::Water);
        assert_eq!(
            outcome.change_coins(),
            &[Coin::TwentyFiveCents, Coin::TenCents]
        );
        assert!(outcome.has_change());
    }

    #[test]
    fn test_exact_payment_has_no_change() {
        let processor = PurchaseProcessor::new();
        let outcome = processor
            .process(
                &[Coin::OneEuro],
                &Inventory::with_defaults(),
                &CoinReserve::with_defaults(),
                Product::Juice,
            )
            .unwrap();

        assert_eq!(outcome.product(), Product::Juice);
        assert!(!outcome.has_change());
    }

    #[test]
    fn test_insufficient_funds() {
        let processor = PurchaseProcessor::new();
        let err = processor
            .process(
                &[Coin::TwentyFiveCents],
                &Inventory::with_defaults(),
                &CoinReserve::with_defaults(),
                Product::Water,
            )
            .unwrap_err();

        assert_eq!(
            err,
            VendingError::InsufficientFunds {
                inserted: Money::from_cents(25).unwrap(),
                required: Money::from_cents(65).unwrap(),
            }
        );
    }

    #[test]
    fn test_product_out_of_stock() {
        let mut inventory = Inventory::with_defaults();
        inventory.set_quantity(Product::Soda, 0);

        let processor = PurchaseProcessor::new();
        let err = processor
            .process(
                &[Coin::OneEuro, Coin::OneEuro],
                &inventory,
                &CoinReserve::with_defaults(),
                Product::Soda,
            )
            .unwrap_err();

        assert_eq!(err, VendingError::ProductOutOfStock("SODA".to_string()));
    }

    #[test]
    fn test_funds_checked_before_stock() {
        // Both conditions fail; insufficient funds wins
        let mut inventory = Inventory::with_defaults();
        inventory.set_quantity(Product::Soda, 0);

        let processor = PurchaseProcessor::new();
        let err = processor
            .process(
                &[Coin::FiveCents],
                &inventory,
                &CoinReserve::with_defaults(),
                Product::Soda,
            )
            .unwrap_err();

        assert!(matches!(err, VendingError::InsufficientFunds { .. }));
    }

    #[test]
    fn test_insufficient_change_propagates() {
        let processor = PurchaseProcessor::new();
        let err = processor
            .process(
                &[Coin::OneEuro, Coin::OneEuro],
                &Inventory::with_defaults(),
                &CoinReserve::new(),
                Product::Water,
            )
            .unwrap_err();

        assert_eq!(
            err,
            VendingError::InsufficientChange(Money::from_cents(135).unwrap())
        );
    }
}
