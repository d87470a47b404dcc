//! Employee and supplier command tests

mod common;

use common::{pantry, seed_employee, seed_supplier, setup_test_project, write_record};
use predicates::prelude::*;

// ============================================================================
// Employee List Tests
// ============================================================================

#[test]
fn test_employee_list_empty_project() {
    let tmp = setup_test_project();

    pantry()
        .current_dir(tmp.path())
        .args(["employee", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No employees found"));
}

#[test]
fn test_employee_list_shows_position_and_shift_labels() {
    let tmp = setup_test_project();
    seed_employee(&tmp, "e1", "Ana Reyes", "BARISTA", "HALF_DAY");
    seed_employee(&tmp, "e2", "Marco Cruz", "MANAGER", "MORNING");

    pantry()
        .current_dir(tmp.path())
        .args(["employee", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Barista"))
        .stdout(predicate::str::contains("Half Day"))
        .stdout(predicate::str::contains("Manager"))
        .stdout(predicate::str::contains("Morning Shift"));
}

#[test]
fn test_employee_list_filter_by_position() {
    let tmp = setup_test_project();
    seed_employee(&tmp, "e1", "Ana Reyes", "BARISTA", "MORNING");
    seed_employee(&tmp, "e2", "Marco Cruz", "CASHIER", "MORNING");

    pantry()
        .current_dir(tmp.path())
        .args(["employee", "list", "-p", "cashier"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marco Cruz"))
        .stdout(predicate::str::contains("Ana Reyes").not());
}

#[test]
fn test_employee_list_filter_by_shift() {
    let tmp = setup_test_project();
    seed_employee(&tmp, "e1", "Ana Reyes", "BARISTA", "NIGHT");
    seed_employee(&tmp, "e2", "Marco Cruz", "BARISTA", "HALF_DAY");

    pantry()
        .current_dir(tmp.path())
        .args(["employee", "list", "--shift", "half-day"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marco Cruz"))
        .stdout(predicate::str::contains("Ana Reyes").not());
}

#[test]
fn test_employee_list_search_matches_email() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "pantry/employees",
        "e1",
        "id: e1\nname: Ana Reyes\nposition: BARISTA\nshift: MORNING\nemail: ana@sipandslice.ph\n",
    );
    seed_employee(&tmp, "e2", "Marco Cruz", "BARISTA", "MORNING");

    pantry()
        .current_dir(tmp.path())
        .args(["employee", "list", "--search", "sipandslice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Reyes"))
        .stdout(predicate::str::contains("Marco Cruz").not());
}

#[test]
fn test_employee_list_sort_by_salary_reversed() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "pantry/employees",
        "e1",
        "id: e1\nname: Ana Reyes\nposition: BARISTA\nshift: MORNING\nsalary: 18500\n",
    );
    write_record(
        &tmp,
        "pantry/employees",
        "e2",
        "id: e2\nname: Marco Cruz\nposition: MANAGER\nshift: MORNING\nsalary: 32000\n",
    );

    let output = pantry()
        .current_dir(tmp.path())
        .args(["employee", "list", "--sort", "salary", "-r"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output_str = String::from_utf8_lossy(&output);
    let marco_pos = output_str.find("Marco Cruz").expect("Marco Cruz not found");
    let ana_pos = output_str.find("Ana Reyes").expect("Ana Reyes not found");
    assert!(
        marco_pos < ana_pos,
        "highest salary should come first when reversed"
    );
}

#[test]
fn test_employee_list_rejects_unknown_position() {
    let tmp = setup_test_project();

    pantry()
        .current_dir(tmp.path())
        .args(["employee", "list", "-p", "janitor"])
        .assert()
        .failure();
}

// ============================================================================
// Employee Show Tests
// ============================================================================

#[test]
fn test_employee_show_card() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "pantry/employees",
        "664f44ee88",
        "id: 664f44ee88\nname: Ana Reyes\nposition: BARISTA\nshift: HALF_DAY\nemail: ana@sipandslice.ph\nphone: 0917-555-0134\nsalary: 18500\nhireDate: 2024-11-03\nperformanceNotes: Great with regulars.\n",
    );

    pantry()
        .current_dir(tmp.path())
        .args(["employee", "show", "ana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("664f44ee88"))
        .stdout(predicate::str::contains("Barista"))
        .stdout(predicate::str::contains("ana@sipandslice.ph"))
        .stdout(predicate::str::contains("₱18500.00"))
        .stdout(predicate::str::contains("2024-11-03"))
        .stdout(predicate::str::contains("Great with regulars."));
}

#[test]
fn test_employee_show_not_found() {
    let tmp = setup_test_project();

    pantry()
        .current_dir(tmp.path())
        .args(["employee", "show", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no employee"));
}

// ============================================================================
// Supplier List Tests
// ============================================================================

#[test]
fn test_supplier_list_empty_project() {
    let tmp = setup_test_project();

    pantry()
        .current_dir(tmp.path())
        .args(["supplier", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No suppliers found"));
}

#[test]
fn test_supplier_list_shows_category_and_default_contract() {
    let tmp = setup_test_project();
    seed_supplier(&tmp, "s1", "Golden Pearl Trading", "MILKTEA_FLAVORS");

    pantry()
        .current_dir(tmp.path())
        .args(["supplier", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Golden Pearl Trading"))
        .stdout(predicate::str::contains("Milktea Flavors"))
        .stdout(predicate::str::contains("ANNUAL"));
}

#[test]
fn test_supplier_list_filter_by_category() {
    let tmp = setup_test_project();
    seed_supplier(&tmp, "s1", "Golden Pearl Trading", "MILKTEA_FLAVORS");
    seed_supplier(&tmp, "s2", "Fresh Harvest Co", "FRUITS");

    pantry()
        .current_dir(tmp.path())
        .args(["supplier", "list", "-c", "fruits"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fresh Harvest Co"))
        .stdout(predicate::str::contains("Golden Pearl Trading").not());
}

#[test]
fn test_supplier_list_filter_by_status() {
    let tmp = setup_test_project();
    seed_supplier(&tmp, "s1", "Golden Pearl Trading", "MILKTEA_FLAVORS");
    write_record(
        &tmp,
        "pantry/suppliers",
        "s2",
        "id: s2\nname: New Leaf Imports\ncategory: INGREDIENTS\nstatus: pending\n",
    );

    pantry()
        .current_dir(tmp.path())
        .args(["supplier", "list", "-s", "pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New Leaf Imports"))
        .stdout(predicate::str::contains("Golden Pearl Trading").not());
}

#[test]
fn test_supplier_list_filter_by_contract() {
    let tmp = setup_test_project();
    seed_supplier(&tmp, "s1", "Golden Pearl Trading", "MILKTEA_FLAVORS");
    write_record(
        &tmp,
        "pantry/suppliers",
        "s2",
        "id: s2\nname: Metro Dairy\ncategory: INGREDIENTS\ncontract: MONTHLY\nstatus: active\n",
    );

    pantry()
        .current_dir(tmp.path())
        .args(["supplier", "list", "--contract", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Metro Dairy"))
        .stdout(predicate::str::contains("Golden Pearl Trading").not());
}

#[test]
fn test_supplier_list_search_matches_place() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "pantry/suppliers",
        "s1",
        "id: s1\nname: Golden Pearl Trading\ncategory: TOPPINGS\nplace: Quezon City\nstatus: active\n",
    );
    seed_supplier(&tmp, "s2", "Fresh Harvest Co", "FRUITS");

    pantry()
        .current_dir(tmp.path())
        .args(["supplier", "list", "--search", "quezon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Golden Pearl Trading"))
        .stdout(predicate::str::contains("Fresh Harvest Co").not());
}

// ============================================================================
// Supplier Show Tests
// ============================================================================

#[test]
fn test_supplier_show_card() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "pantry/suppliers",
        "664f55ff99",
        "id: 664f55ff99\nname: Golden Pearl Trading\ncategory: TOPPINGS\nplace: Quezon City\ncontactPerson: Liza Tan\nwebsite: goldenpearl.ph\ncontract: QUARTERLY\nstatus: active\n",
    );

    pantry()
        .current_dir(tmp.path())
        .args(["supplier", "show", "golden"])
        .assert()
        .success()
        .stdout(predicate::str::contains("664f55ff99"))
        .stdout(predicate::str::contains("Toppings"))
        .stdout(predicate::str::contains("Liza Tan"))
        .stdout(predicate::str::contains("Quezon City"))
        .stdout(predicate::str::contains("QUARTERLY"))
        .stdout(predicate::str::contains("goldenpearl.ph"));
}

#[test]
fn test_supplier_show_not_found() {
    let tmp = setup_test_project();

    pantry()
        .current_dir(tmp.path())
        .args(["supplier", "show", "acme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no supplier"));
}

#[test]
fn test_supplier_show_json() {
    let tmp = setup_test_project();
    seed_supplier(&tmp, "s1", "Golden Pearl Trading", "TOPPINGS");

    pantry()
        .current_dir(tmp.path())
        .args(["supplier", "show", "s1", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Golden Pearl Trading\""))
        .stdout(predicate::str::contains("\"status\": \"active\""));
}
