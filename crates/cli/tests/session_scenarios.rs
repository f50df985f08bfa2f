//! End-to-end menu sessions against a real backing file.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use stockroom_cli::{AppConfig, Console, Session};
use stockroom_infra::FlatFileSource;
use stockroom_inventory::Quantity;
use tempfile::tempdir;

const INVENTORY: &str = "Country,Code,Product,Cost,Quantity\n\
    US,A1,Shoe1,10.0,5\n\
    US,A2,Shoe2,8.0,2\n";

type TestSession = Session<FlatFileSource, Cursor<Vec<u8>>, Vec<u8>>;

fn session(path: &Path, script: &str) -> TestSession {
    let config = AppConfig::with_inventory_path(path);
    Session::new(
        FlatFileSource::new(&config.inventory_path),
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new()),
    )
}

fn finish(session: TestSession) -> String {
    String::from_utf8(session.into_console().into_output()).unwrap()
}

/// Load, report the highest stock, restock the lowest and check the file.
#[test]
fn load_highest_and_restock_scenario() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.txt");
    fs::write(&path, INVENTORY).unwrap();

    let mut s = session(&path, "1\n7\n4\n3\n8\n");
    s.run().unwrap();

    assert_eq!(s.inventory().len(), 2);
    assert_eq!(s.inventory().get(1).unwrap().quantity(), Quantity::new(5));
    assert_eq!(s.inventory().get(0).unwrap().quantity(), Quantity::new(5));

    let on_disk = fs::read_to_string(&path).unwrap();
    assert_eq!(
        on_disk,
        "Country,Code,Product,Cost,Quantity\nUS,A1,Shoe1,10.0,5\nUS,A2,Shoe2,8.0,5\n"
    );

    let out = finish(s);
    assert!(out.contains("The shoe with the highest quantity is:\nCountry: US, Code: A1"));
    assert!(out.contains("Shoe1 is available for sale!"));
    assert!(out.contains("The shoe with the lowest quantity is:\nCountry: US, Code: A2"));
    assert!(out.contains("Updated quantity for Shoe2: 5"));
}

/// Restocking by zero twice leaves both the inventory and the file as they were.
#[test]
fn zero_restock_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.txt");
    fs::write(&path, INVENTORY).unwrap();

    let mut s = session(&path, "1\n4\n0\n4\n0\n8\n");
    s.run().unwrap();

    assert_eq!(s.inventory().get(1).unwrap().quantity(), Quantity::new(2));
    assert_eq!(fs::read_to_string(&path).unwrap(), INVENTORY);
}

/// Every operation on an empty inventory reports it and changes nothing.
#[test]
fn empty_inventory_scenario() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.txt");
    fs::write(&path, INVENTORY).unwrap();

    let mut s = session(&path, "3\n4\n5\n6\n7\n8\n");
    s.run().unwrap();

    assert!(s.inventory().is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), INVENTORY);

    let out = finish(s);
    assert_eq!(out.matches("No shoes in the inventory.").count(), 4);
    assert_eq!(out.matches("No shoes in the inventory to restock.").count(), 1);
}

/// A non-numeric cost rejects the whole capture.
#[test]
fn capture_with_bad_cost_scenario() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.txt");

    let mut s = session(&path, "2\nUS\nA3\nShoe3\nabc\n3\n8\n");
    s.run().unwrap();

    assert!(s.inventory().is_empty());
    let out = finish(s);
    assert!(out.contains("Error: Please enter valid numeric values for cost and quantity."));
    assert!(out.contains("No shoes in the inventory."));
    assert!(!path.exists());
}

/// A missing file is reported and the session carries on with an empty inventory.
#[test]
fn missing_file_is_not_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.txt");

    let mut s = session(&path, "1\n2\nIT\nB7\nLoafer\n120.5\n3\n3\n8\n");
    s.run().unwrap();

    assert_eq!(s.inventory().len(), 1);
    let out = finish(s);
    assert!(out.contains("was not found."));
    assert!(out.contains("Country: IT, Code: B7, Product: Loafer, Cost: 120.5, Quantity: 3"));
    assert!(out.ends_with("Exiting the program. Goodbye!\n"));
}

/// Search reports one miss after a full scan and finds later matches.
#[test]
fn search_scenario() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.txt");
    fs::write(&path, INVENTORY).unwrap();

    let mut s = session(&path, "1\n5\nA2\n5\nnope\n8\n");
    s.run().unwrap();

    let out = finish(s);
    assert!(out.contains("Shoe found:\nCountry: US, Code: A2"));
    assert_eq!(out.matches("Shoe with the given code not found.").count(), 1);
}

/// Loading twice appends duplicates; search and restock still pick the first.
#[test]
fn repeated_load_appends_duplicates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.txt");
    fs::write(&path, INVENTORY).unwrap();

    let mut s = session(&path, "1\n1\n4\n1\n6\n8\n");
    s.run().unwrap();

    let inventory = s.inventory();
    assert_eq!(inventory.len(), 4);
    assert_eq!(inventory.get(1).unwrap().quantity(), Quantity::new(3));
    assert_eq!(inventory.get(3).unwrap().quantity(), Quantity::new(2));
    assert!(fs::read_to_string(&path).unwrap().contains("US,A2,Shoe2,8.0,3\n"));

    let out = finish(s);
    assert!(out.contains("Value per item:\nShoe1: Value = 50.0\nShoe2: Value = 24.0\n"));
}
