// 🎰 VendingMachine - The single persisted aggregate
// One session at a time: Idle → Funded (coins inserted) → Idle again via a
// successful purchase or an explicit coin return. Failed purchases leave
// every field untouched.

use crate::coin::Coin;
use crate::error::VendingError;
use crate::inventory::{CoinReserve, Inventory};
use crate::money::Money;
use crate::product::Product;
use crate::purchase::{sum_coins, PurchaseOutcome, PurchaseProcessor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The machine's full mutable state. Exactly one instance exists per
/// deployment; the repository creates it with factory defaults on first load
/// and it is only ever reset, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendingMachine {
    /// Coins inserted in the active session, in insertion order
    inserted_coins: Vec<Coin>,

    /// Product stock
    available_products: Inventory,

    /// Coins held for making change
    available_change: CoinReserve,

    /// Change returned by the most recent successful purchase
    #[serde(default)]
    last_change_dispensed: Vec<Coin>,
}

impl VendingMachine {
    /// Factory state: 5 of each product; reserve 5c=10, 10c=10, 25c=10, 1€=5.
    pub fn new() -> Self {
        VendingMachine {
            inserted_coins: Vec::new(),
            available_products: Inventory::with_defaults(),
            available_change: CoinReserve::with_defaults(),
            last_change_dispensed: Vec::new(),
        }
    }

    // ========================================================================
    // CUSTOMER OPERATIONS
    // ========================================================================

    /// Accept a coin. The denomination was validated at construction, so
    /// this cannot fail.
    pub fn insert_coin(&mut self, coin: Coin) {
        self.inserted_coins.push(coin);
    }

    /// Current balance: the sum of inserted coins.
    pub fn inserted_amount(&self) -> Money {
        sum_coins(&self.inserted_coins)
    }

    /// Attempt to buy a product with the current balance.
    ///
    /// On success the stock drops by one, the reserve drops by exactly the
    /// dispensed change coins, the change is recorded and the balance clears.
    /// On any error the machine is unchanged and the customer keeps the
    /// balance to add coins, retry, or cash out.
    pub fn purchase_product(
        &mut self,
        product: Product,
        processor: &PurchaseProcessor,
    ) -> Result<PurchaseOutcome, VendingError> {
        let outcome = processor.process(
            &self.inserted_coins,
            &self.available_products,
            &self.available_change,
            product,
        )?;

        self.available_products.remove_one(product);
        for &coin in outcome.change_coins() {
            self.available_change.remove_one(coin);
        }
        self.last_change_dispensed = outcome.change_coins().to_vec();
        self.inserted_coins.clear();

        Ok(outcome)
    }

    /// Cash out: hand back all inserted coins in insertion order and clear
    /// the balance. Inventory and reserve are untouched.
    pub fn return_coins(&mut self) -> Vec<Coin> {
        std::mem::take(&mut self.inserted_coins)
    }

    // ========================================================================
    // OPERATOR OPERATIONS
    // ========================================================================

    /// Overwrite stock quantities for the given products only.
    pub fn restock_products(&mut self, quantities: &BTreeMap<Product, u32>) {
        self.available_products.restock(quantities);
    }

    /// Overwrite reserve counts for the given denominations only.
    pub fn restock_change(&mut self, counts: &BTreeMap<Coin, u32>) {
        self.available_change.restock(counts);
    }

    /// Back to factory state: balance cleared, stock and reserve refilled,
    /// last dispensed change forgotten.
    pub fn reset(&mut self) {
        self.inserted_coins.clear();
        self.available_products = Inventory::with_defaults();
        self.available_change = CoinReserve::with_defaults();
        self.last_change_dispensed.clear();
    }

    // ========================================================================
    // READS
    // ========================================================================

    pub fn inserted_coins(&self) -> &[Coin] {
        &self.inserted_coins
    }

    pub fn available_products(&self) -> &Inventory {
        &self.available_products
    }

    pub fn available_change(&self) -> &CoinReserve {
        &self.available_change
    }

    pub fn last_change_dispensed(&self) -> &[Coin] {
        &self.last_change_dispensed
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
