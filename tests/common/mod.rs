//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Helper to get a pantry command
pub fn pantry() -> Command {
    Command::new(cargo::cargo_bin!("pantry"))
}

/// Helper to create a test project in a temp directory
pub fn setup_test_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    pantry()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();
    tmp
}

/// Write a raw record file under a resource directory.
pub fn write_record(tmp: &TempDir, dir: &str, id: &str, yaml: &str) {
    let path = tmp.path().join(dir).join(format!("{id}.yaml"));
    fs::write(path, yaml).unwrap();
}

/// Seed a flavor with standard bands (min 2, max 10) and matching
/// jars/quantity.
pub fn seed_flavor(tmp: &TempDir, id: &str, name: &str, jars: f64) {
    write_record(
        tmp,
        "pantry/flavors",
        id,
        &format!(
            "id: {id}\nname: {name}\ncategory: CLASSIC_FLAVORS\njars: {jars}\nquantity: {jars}\nminStockLevel: 2\nmaxStockLevel: 10\nstatus: ACTIVE\n"
        ),
    );
}

/// Seed an ingredient measured in grams (min 100, max 1000).
pub fn seed_ingredient(tmp: &TempDir, id: &str, name: &str, quantity: f64) {
    write_record(
        tmp,
        "pantry/ingredients",
        id,
        &format!(
            "id: {id}\nname: {name}\ncategory: TOPPINGS\nquantity: {quantity}\nunit: grams\nminStockLevel: 100\nmaxStockLevel: 1000\nstatus: ACTIVE\n"
        ),
    );
}

/// Seed a utensil counted by the piece (min 20, max 600).
pub fn seed_utensil(tmp: &TempDir, id: &str, name: &str, quantity: f64) {
    write_record(
        tmp,
        "pantry/utensils",
        id,
        &format!(
            "id: {id}\nname: {name}\ncategory: BAKING_TOOLS\nquantity: {quantity}\nminStockLevel: 20\nmaxStockLevel: 600\nstatus: AVAILABLE\n"
        ),
    );
}

/// Seed an employee record.
pub fn seed_employee(tmp: &TempDir, id: &str, name: &str, position: &str, shift: &str) {
    write_record(
        tmp,
        "pantry/employees",
        id,
        &format!("id: {id}\nname: {name}\nposition: {position}\nshift: {shift}\n"),
    );
}

/// Seed a supplier record.
pub fn seed_supplier(tmp: &TempDir, id: &str, name: &str, category: &str) {
    write_record(
        tmp,
        "pantry/suppliers",
        id,
        &format!("id: {id}\nname: {name}\ncategory: {category}\nstatus: active\n"),
    );
}
