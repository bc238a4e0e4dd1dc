// 🥤 Product - Fixed catalog with a static price table
// Prices live in the lookup, not in per-instance state

use crate::error::VendingError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A product the machine can sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Product {
    Water,
    Juice,
    Soda,
}

impl Product {
    /// Full catalog, for display and iteration.
    pub const ALL: [Product; 3] = [Product::Water, Product::Juice, Product::Soda];

    /// Catalog name (the uppercase form used at every boundary).
    pub fn name(&self) -> &'static str {
        match self {
            Product::Water => "WATER",
            Product::Juice => "JUICE",
            Product::Soda => "SODA",
        }
    }

    /// Fixed price: WATER=0.65, JUICE=1.00, SODA=1.50.
    pub fn price(&self) -> Money {
        let cents = match self {
            Product::Water => 65,
            Product::Juice => 100,
            Product::Soda => 150,
        };
        // Static table, always a valid amount
        Money::from_cents(cents).unwrap_or_else(|_| Money::zero())
    }

    /// Look up a product by catalog name. Fails with `InvalidProduct` for
    /// anything outside the catalog. Matching is case-insensitive so CLI
    /// input like `water` works.
    pub fn from_name(name: &str) -> Result<Self, VendingError> {
        match name.to_uppercase().as_str() {
            "WATER" => Ok(Product::Water),
            "JUICE" => Ok(Product::Juice),
            "SODA" => Ok(Product::Soda),
            _ => Err(VendingError::InvalidProduct(name.to_string())),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// TESTS
// ============================================================================
