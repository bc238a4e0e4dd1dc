// Vending Machine - Core Library
// Coin intake, purchase validation, greedy change-making and restocking for
// a single persisted machine aggregate. Entrypoints (CLI) stay thin: every
// operation is a load → mutate → save cycle against the repository.

pub mod change;
pub mod coin;
pub mod db;
pub mod error;
pub mod inventory;
pub mod machine;
pub mod money;
pub mod product;
pub mod purchase;

// Re-export commonly used types
pub use change::ChangeCalculator;
pub use coin::Coin;
pub use db::{setup_database, SqliteVendingMachineRepository, VendingMachineRepository};
pub use error::VendingError;
pub use inventory::{CoinReserve, Inventory};
pub use machine::VendingMachine;
pub use money::Money;
pub use product::Product;
pub use purchase::{PurchaseOutcome, PurchaseProcessor};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
