// Vending Machine CLI - thin adapter over the core library
// Each subcommand is one load → mutate → save cycle against the SQLite store

use anyhow::Result;
use std::collections::BTreeMap;
use std::env;

use vending_machine::{
    Coin, Product, PurchaseProcessor, SqliteVendingMachineRepository, VendingMachineRepository,
};

const DB_PATH: &str = "vending.db";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let repo = SqliteVendingMachineRepository::open(DB_PATH)?;

    match args.get(1).map(String::as_str) {
        Some("insert") => run_insert(&repo, &args[2..]),
        Some("purchase") => run_purchase(&repo, &args[2..]),
        Some("return") => run_return(&repo),
        Some("restock") => run_restock(&repo, &args[2..]),
        Some("inventory") => run_inventory(&repo),
        Some("reset") => run_reset(&repo),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("Vending Machine v{}", vending_machine::VERSION);
    println!();
    println!("Usage:");
    println!("  vending-machine insert <value>            Insert a coin (0.05, 0.10, 0.25, 1.00)");
    println!("  vending-machine purchase <product>        Buy WATER, JUICE or SODA");
    println!("  vending-machine return                    Return all inserted coins");
    println!("  vending-machine restock product <NAME> <QTY>");
    println!("  vending-machine restock coin <CENTS> <QTY>");
    println!("  vending-machine inventory                 Show balance, stock and reserve");
    println!("  vending-machine reset                     Restore factory state");
}

fn run_insert(repo: &SqliteVendingMachineRepository, args: &[String]) -> Result<()> {
    let Some(value) = args.first().and_then(|v| v.parse::<f64>().ok()) else {
        println!("✗ Usage: insert <value>");
        return Ok(());
    };

    let coin = match Coin::from_decimal(value) {
        Ok(coin) => coin,
        Err(e) => {
            println!("✗ {}", e);
            return Ok(());
        }
    };

    let mut machine = repo.load()?;
    machine.insert_coin(coin);
    repo.save(&machine)?;

    println!("✓ Inserted {}", coin);
    println!("  Balance: {}", machine.inserted_amount());
    Ok(())
}

fn run_purchase(repo: &SqliteVendingMachineRepository, args: &[String]) -> Result<()> {
    let Some(name) = args.first() else {
        println!("✗ Usage: purchase <product>");
        return Ok(());
    };

    let product = match Product::from_name(name) {
        Ok(product) => product,
        Err(e) => {
            println!("✗ {}", e);
            return Ok(());
        }
    };

    let mut machine = repo.load()?;
    let processor = PurchaseProcessor::new();

    match machine.purchase_product(product, &processor) {
        Ok(outcome) => {
            // Only a successful purchase is persisted
            repo.save(&machine)?;

            println!("✓ Dispensed: {}", outcome.product());
            if outcome.has_change() {
                let coins: Vec<String> =
                    outcome.change_coins().iter().map(Coin::to_string).collect();
                println!("  Change: {}", coins.join(", "));
            } else {
                println!("  Exact payment, no change");
            }
        }
        Err(e) => {
            println!("✗ {}", e);
            println!("  Balance: {}", machine.inserted_amount());
        }
    }
    Ok(())
}

fn run_return(repo: &SqliteVendingMachineRepository) -> Result<()> {
    let mut machine = repo.load()?;
    let coins = machine.return_coins();
    repo.save(&machine)?;

    if coins.is_empty() {
        println!("✓ No coins to return");
    } else {
        let values: Vec<String> = coins.iter().map(Coin::to_string).collect();
        println!("✓ Returned: {}", values.join(", "));
    }
    Ok(())
}

fn run_restock(repo: &SqliteVendingMachineRepository, args: &[String]) -> Result<()> {
    let (Some(kind), Some(key), Some(qty)) = (args.first(), args.get(1), args.get(2)) else {
        println!("✗ Usage: restock product <NAME> <QTY> | restock coin <CENTS> <QTY>");
        return Ok(());
    };

    let Ok(quantity) = qty.parse::<u32>() else {
        println!("✗ Quantity must be a non-negative integer");
        return Ok(());
    };

    let mut machine = repo.load()?;

    match kind.as_str() {
        "product" => {
            let product = match Product::from_name(key) {
                Ok(product) => product,
                Err(e) => {
                    println!("✗ {}", e);
                    return Ok(());
                }
            };
            let mut quantities = BTreeMap::new();
            quantities.insert(product, quantity);
            machine.restock_products(&quantities);
            repo.save(&machine)?;
            println!("✓ {} stock set to {}", product, quantity);
        }
        "coin" => {
            let Ok(cents) = key.parse::<i64>() else {
                println!("✗ Coin must be given in cents (5, 10, 25, 100)");
                return Ok(());
            };
            let coin = match Coin::from_cents(cents) {
                Ok(coin) => coin,
                Err(e) => {
                    println!("✗ {}", e);
                    return Ok(());
                }
            };
            let mut counts = BTreeMap::new();
            counts.insert(coin, quantity);
            machine.restock_change(&counts);
            repo.save(&machine)?;
            println!("✓ Reserve of {} set to {}", coin, quantity);
        }
        other => {
            println!("✗ Unknown restock target: {}", other);
        }
    }
    Ok(())
}

fn run_inventory(repo: &SqliteVendingMachineRepository) -> Result<()> {
    let machine = repo.load()?;

    println!("💰 Balance: {}", machine.inserted_amount());
    println!();
    println!("Products:");
    for product in Product::ALL {
        println!(
            "  {:<6} {}  x{}",
            product.name(),
            product.price(),
            machine.available_products().quantity(product)
        );
    }
    println!();
    println!("Coin reserve:");
    for coin in Coin::DESCENDING {
        println!("  {}  x{}", coin, machine.available_change().count(coin));
    }

    if !machine.last_change_dispensed().is_empty() {
        let coins: Vec<String> = machine
            .last_change_dispensed()
            .iter()
            .map(Coin::to_string)
            .collect();
        println!();
        println!("Last change dispensed: {}", coins.join(", "));
    }
    Ok(())
}

fn run_reset(repo: &SqliteVendingMachineRepository) -> Result<()> {
    repo.reset()?;
    println!("✓ Machine reset to factory state");
    Ok(())
}
