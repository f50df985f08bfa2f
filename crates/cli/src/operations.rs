//! Menu operations over the inventory and its backing file.
//!
//! Every operation reports its own failures to the console and returns
//! control to the menu. Only terminal IO errors propagate.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use stockroom_core::{DomainError, ValueObject};
use stockroom_infra::{InventoryFileError, InventorySource};
use stockroom_inventory::{Inventory, Quantity, RestockAmount, Shoe, UnitCost};

use crate::console::Console;

const EMPTY_INVENTORY: &str = "\nNo shoes in the inventory.";

fn report_file_error<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &InventoryFileError,
) -> io::Result<()> {
    warn!(error = %err, "inventory file operation failed");
    match err {
        InventoryFileError::NotFound(path) => {
            console.say(format!("\nError: The file '{}' was not found.", path.display()))
        }
        InventoryFileError::Malformed { line, source } => {
            console.say(format!("\nError: Data format issue - line {line}: {source}"))
        }
        InventoryFileError::Io { .. } => console.say(format!("\nError: {err}")),
    }
}

/// Append every record in the backing file to the inventory.
pub fn read_file<S, R, W>(
    inventory: &mut Inventory,
    source: &S,
    console: &mut Console<R, W>,
) -> io::Result<()>
where
    S: InventorySource,
    R: BufRead,
    W: Write,
{
    let outcome = match source.load() {
        Ok(outcome) => outcome,
        Err(err) => return report_file_error(console, &err),
    };

    for shoe in outcome.shoes {
        console.say(format!("\nShoe added: {shoe}"))?;
        inventory.push(shoe);
    }
    if let Some(err) = &outcome.aborted {
        report_file_error(console, err)?;
    }
    Ok(())
}

/// Prompt for a new shoe and append it to the inventory.
///
/// The backing file is not touched.
pub fn capture<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(country) = console.prompt("\nEnter the country: ")? else {
        return Ok(());
    };
    let Some(code) = console.prompt("Enter the shoe code: ")? else {
        return Ok(());
    };
    let Some(product) = console.prompt("Enter the product name: ")? else {
        return Ok(());
    };

    // A bad cost aborts before the quantity is asked for.
    let Some(raw_cost) = console.prompt("Enter the cost of the shoe: ")? else {
        return Ok(());
    };
    let cost = match UnitCost::parse_field(&raw_cost) {
        Ok(cost) => cost,
        Err(err) => return reject_capture(console, &err),
    };
    let Some(raw_quantity) = console.prompt("Enter the quantity of the shoe: ")? else {
        return Ok(());
    };
    let quantity = match Quantity::parse_field(&raw_quantity) {
        Ok(quantity) => quantity,
        Err(err) => return reject_capture(console, &err),
    };

    let shoe = Shoe::new(country, code, product, cost, quantity);
    info!(code = %shoe.code(), "shoe captured");
    inventory.push(shoe);
    console.say("\nShoe successfully added to the inventory.")
}

fn reject_capture<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &DomainError,
) -> io::Result<()> {
    warn!(error = %err, "capture rejected");
    console.say("\nError: Please enter valid numeric values for cost and quantity.")
}

/// List every shoe in insertion order.
pub fn view_all<R: BufRead, W: Write>(
    inventory: &Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Ok(shoes) = inventory.list() else {
        return console.say(EMPTY_INVENTORY);
    };
    for shoe in shoes {
        console.say(shoe)?;
    }
    Ok(())
}

/// Top up the lowest-quantity shoe and persist its new quantity.
///
/// If the file cannot be updated the in-memory quantity is put back.
pub fn restock<S, R, W>(
    inventory: &mut Inventory,
    source: &S,
    console: &mut Console<R, W>,
) -> io::Result<()>
where
    S: InventorySource,
    R: BufRead,
    W: Write,
{
    let Ok(plan) = inventory.plan_restock() else {
        return console.say("\nNo shoes in the inventory to restock.");
    };
    if let Some(shoe) = inventory.get(plan.position()) {
        console.say(format!("\nThe shoe with the lowest quantity is:\n{shoe}"))?;
    }

    let Some(raw) = console.prompt("\nEnter the quantity to add: ")? else {
        return Ok(());
    };
    let amount = match RestockAmount::parse(&raw) {
        Ok(amount) => amount,
        Err(err) => {
            warn!(error = %err, "restock rejected");
            return console.say(restock_rejection(&err));
        }
    };

    let updated = match inventory.apply_restock(&plan, amount) {
        Ok(shoe) => shoe.clone(),
        Err(err) => {
            warn!(error = %err, "restock rejected");
            return console.say(restock_rejection(&err));
        }
    };

    if let Err(err) = source.persist_quantity(&updated) {
        inventory.revert_restock(&plan);
        return report_file_error(console, &err);
    }

    info!(code = %updated.code(), quantity = %updated.quantity(), "shoe restocked");
    console.say(format!(
        "\nUpdated quantity for {}: {}",
        updated.product(),
        updated.quantity()
    ))
}

fn restock_rejection(err: &DomainError) -> String {
    match err {
        DomainError::MalformedInput { .. } => {
            "\nError: Please enter a valid numeric value for the quantity.".to_string()
        }
        DomainError::NegativeQuantity => "\nError: Quantity cannot be negative.".to_string(),
        other => format!("\nError: {other}."),
    }
}

/// Find the first shoe with an exactly matching code.
pub fn search<R: BufRead, W: Write>(
    inventory: &Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    if inventory.is_empty() {
        return console.say(EMPTY_INVENTORY);
    }
    let Some(code) = console.prompt("\nEnter the shoe code to search: ")? else {
        return Ok(());
    };

    match inventory.find_by_code(&code) {
        Ok(shoe) => {
            console.say("Shoe found:")?;
            console.say(shoe)
        }
        Err(_) => console.say("\nShoe with the given code not found."),
    }
}

/// Report `cost * quantity` for every shoe.
pub fn value_per_item<R: BufRead, W: Write>(
    inventory: &Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Ok(values) = inventory.valuations() else {
        return console.say(EMPTY_INVENTORY);
    };
    console.say("\nValue per item:")?;
    for item in values {
        console.say(format!("{}: Value = {:?}", item.product, item.value))?;
    }
    Ok(())
}

/// Show the shoe with the most stock as being for sale.
pub fn highest_quantity<R: BufRead, W: Write>(
    inventory: &Inventory,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Ok(shoe) = inventory.highest_quantity() else {
        return console.say(EMPTY_INVENTORY);
    };
    console.say(format!("\nThe shoe with the highest quantity is:\n{shoe}"))?;
    console.say(format!("{} is available for sale!", shoe.product()))
}
