// ⚠️ Domain Errors - Validation failures surfaced to the caller
// Every error leaves the machine exactly as it was before the failed operation

use crate::money::Money;
use thiserror::Error;

/// Domain-level validation errors.
///
/// All variants are synchronous, local failures — never transient or retryable.
/// Formatting for end users is an adapter concern; these messages are for
/// operators and logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VendingError {
    /// Coin value not in the accepted denomination set
    #[error("Invalid coin denomination: {0:.2}")]
    InvalidDenomination(f64),

    /// Product name not in the catalog
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// A negative monetary value was constructed
    #[error("Money amount cannot be negative: {0} cents")]
    InvalidAmount(i64),

    /// Purchase attempted with balance below the product price
    #[error("Insufficient funds: inserted {inserted}, required {required}")]
    InsufficientFunds { inserted: Money, required: Money },

    /// Purchase attempted against zero/absent inventory
    #[error("Product out of stock: {0}")]
    ProductOutOfStock(String),

    /// Overpayment cannot be satisfied exactly from the coin reserve
    #[error("Insufficient change available: {0} owed")]
    InsufficientChange(Money),
}
