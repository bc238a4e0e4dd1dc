// 🗄️ Persistence - Single-row SQLite store behind the load/save port
// Exactly one logical machine per deployment: row id is pinned to 1 and the
// row is created with factory defaults on first load

use crate::machine::VendingMachine;
use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Create tables and set pragmas.
pub fn setup_database(conn: &Connection) -> Result<()> {
    // WAL for better concurrent read behavior
    conn.pragma_update(None, "journal_mode", "WAL")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS vending_machine (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            state TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )
    .context("Failed to create vending_machine table")?;

    Ok(())
}

// ============================================================================
// LOAD/SAVE PORT
// ============================================================================

/// Load/save port for the single machine aggregate.
///
/// Whoever holds the loaded aggregate owns it exclusively until the next
/// save; the store serializes concurrent access, not the core.
pub trait VendingMachineRepository {
    /// Load the machine, creating and persisting a fresh default instance
    /// if none exists yet.
    fn load(&self) -> Result<VendingMachine>;

    /// Persist the machine's current state.
    fn save(&self, machine: &VendingMachine) -> Result<()>;

    /// Convenience: load, reset to factory state, save.
    fn reset(&self) -> Result<VendingMachine>;
}

// ============================================================================
// SQLITE REPOSITORY
// ============================================================================

pub struct SqliteVendingMachineRepository {
    conn: Connection,
}

impl SqliteVendingMachineRepository {
    /// Wrap an existing connection, creating the schema if needed.
    pub fn new(conn: Connection) -> Result<Self> {
        setup_database(&conn)?;
        Ok(SqliteVendingMachineRepository { conn })
    }

    /// Open (or create) the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .with_context(|| format!("Failed to open database: {:?}", path.as_ref()))?;
        Self::new(conn)
    }
}

impl VendingMachineRepository for SqliteVendingMachineRepository {
    fn load(&self) -> Result<VendingMachine> {
        let state: Option<String> = self
            .conn
            .query_row(
                "SELECT state FROM vending_machine WHERE id = 1",
                [],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to read vending machine row")?;

        match state {
            Some(json) => {
                serde_json::from_str(&json).context("Failed to decode vending machine state")
            }
            None => {
                // First load: persist the factory-default machine
                let machine = VendingMachine::new();
                self.save(&machine)?;
                Ok(machine)
            }
        }
    }

    fn save(&self, machine: &VendingMachine) -> Result<()> {
        let json =
            serde_json::to_string(machine).context("Failed to encode vending machine state")?;

        self.conn
            .execute(
                "INSERT INTO vending_machine (id, state, updated_at)
                 VALUES (1, ?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET state = ?1, updated_at = ?2",
                params![json, Utc::now().to_rfc3339()],
            )
            .context("Failed to save vending machine state")?;

        Ok(())
    }

    fn reset(&self) -> Result<VendingMachine> {
        let mut machine = self.load()?;
        machine.reset();
        self.save(&machine)?;
        Ok(machine)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::Coin;
    use crate::product::Product;
    use crate::purchase::PurchaseProcessor;

    fn repository() -> SqliteVendingMachineRepository {
        let conn = Connection::open_in_memory().unwrap();
        SqliteVendingMachineRepository::new(conn).unwrap()
    }

    #[test]
    fn test_first_load_creates_default_machine() {
        let repo = repository();
        let machine = repo.load().unwrap();
        assert_eq!(machine, VendingMachine::new());

        // The created instance was persisted, not just returned
        let count: i64 = repo
            .conn
            .query_row("SELECT COUNT(*) FROM vending_machine", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let repo = repository();
        let mut machine = repo.load().unwrap();

        machine.insert_coin(Coin::TwentyFiveCents);
        machine.insert_coin(Coin::TenCents);
        repo.save(&machine).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, machine);
        assert_eq!(loaded.inserted_amount().cents(), 35);
    }

    #[test]
    fn test_save_overwrites_single_row() {
        let repo = repository();
        let mut machine = repo.load().unwrap();

        machine.insert_coin(Coin::OneEuro);
        repo.save(&machine).unwrap();
        machine.return_coins();
        repo.save(&machine).unwrap();

        let count: i64 = repo
            .conn
            .query_row("SELECT COUNT(*) FROM vending_machine", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
        assert!(repo.load().unwrap().inserted_amount().is_zero());
    }

    #[test]
    fn test_purchase_survives_load_save_cycle() {
        let repo = repository();
        let processor = PurchaseProcessor::new();

        let mut machine = repo.load().unwrap();
        machine.insert_coin(Coin::OneEuro);
        machine.purchase_product(Product::Water, &processor).unwrap();
        repo.save(&machine).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.available_products().quantity(Product::Water), 4);
        assert_eq!(
            loaded.last_change_dispensed(),
            &[Coin::TwentyFiveCents, Coin::TenCents]
        );
    }

    #[test]
    fn test_reset_restores_factory_state() {
        let repo = repository();
        let mut machine = repo.load().unwrap();
        machine.insert_coin(Coin::OneEuro);
        repo.save(&machine).unwrap();

        let reset = repo.reset().unwrap();
        assert_eq!(reset, VendingMachine::new());
        assert_eq!(repo.load().unwrap(), VendingMachine::new());
    }
}
