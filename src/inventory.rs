// 📦 Inventory & CoinReserve - Quantity maps behind the machine's stock
// Unsigned quantities keep the "never negative" invariant by construction

use crate::coin::Coin;
use crate::product::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// PRODUCT INVENTORY
// ============================================================================

/// Product → available quantity. Absent entry means out of stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    products: BTreeMap<Product, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Inventory {
            products: BTreeMap::new(),
        }
    }

    /// Factory fill: 5 of each catalog product.
    pub fn with_defaults() -> Self {
        let mut inventory = Inventory::new();
        for product in Product::ALL {
            inventory.products.insert(product, 5);
        }
        inventory
    }

    /// Quantity on hand (0 if the product was never stocked).
    pub fn quantity(&self, product: Product) -> u32 {
        self.products.get(&product).copied().unwrap_or(0)
    }

    pub fn is_in_stock(&self, product: Product) -> bool {
        self.quantity(product) > 0
    }

    pub fn set_quantity(&mut self, product: Product, quantity: u32) {
        self.products.insert(product, quantity);
    }

    /// Overwrite the quantities for the given products. Products not named
    /// keep their current quantity.
    pub fn restock(&mut self, quantities: &BTreeMap<Product, u32>) {
        for (&product, &quantity) in quantities {
            self.products.insert(product, quantity);
        }
    }

    /// Take one unit out. No-op when nothing is on hand; callers validate
    /// stock before dispensing.
    pub fn remove_one(&mut self, product: Product) {
        if let Some(quantity) = self.products.get_mut(&product) {
            if *quantity > 0 {
                *quantity -= 1;
            }
        }
    }

    pub fn products(&self) -> &BTreeMap<Product, u32> {
        &self.products
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// COIN RESERVE
// ============================================================================

/// Denomination → number of coins held for making change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinReserve {
    coins: BTreeMap<Coin, u32>,
}

impl CoinReserve {
    pub fn new() -> Self {
        CoinReserve {
            coins: BTreeMap::new(),
        }
    }

    /// Factory fill: 10 each of 5c/10c/25c, 5 one-euro coins.
    pub fn with_defaults() -> Self {
        let mut reserve = CoinReserve::new();
        reserve.coins.insert(Coin::FiveCents, 10);
        reserve.coins.insert(Coin::TenCents, 10);
        reserve.coins.insert(Coin::TwentyFiveCents, 10);
        reserve.coins.insert(Coin::OneEuro, 5);
        reserve
    }

    /// Coins on hand for a denomination (0 if never stocked).
    pub fn count(&self, coin: Coin) -> u32 {
        self.coins.get(&coin).copied().unwrap_or(0)
    }

    pub fn set_count(&mut self, coin: Coin, count: u32) {
        self.coins.insert(coin, count);
    }

    /// Overwrite the counts for the given denominations. Denominations not
    /// named keep their current count.
    pub fn restock(&mut self, counts: &BTreeMap<Coin, u32>) {
        for (&coin, &count) in counts {
            self.coins.insert(coin, count);
        }
    }

    /// Take one coin out. No-op when empty; callers only dispense what the
    /// change calculator already verified.
    pub fn remove_one(&mut self, coin: Coin) {
        if let Some(count) = self.coins.get_mut(&coin) {
            if *count > 0 {
                *count -= 1;
            }
        }
    }

    pub fn coins(&self) -> &BTreeMap<Coin, u32> {
        &self.coins
    }
}

impl Default for CoinReserve {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
