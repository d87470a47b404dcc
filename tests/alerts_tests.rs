//! Alerts command tests

mod common;

use common::{pantry, seed_flavor, setup_test_project, write_record};
use predicates::prelude::*;

#[test]
fn test_alerts_clean_inventory() {
    let tmp = setup_test_project();
    seed_flavor(&tmp, "f1", "Wintermelon", 6.0);

    pantry()
        .current_dir(tmp.path())
        .arg("alerts")
        .assert()
        .success()
        .stdout(predicate::str::contains("No alerts."));
}

#[test]
fn test_alerts_reports_expired_stock() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "pantry/flavors",
        "f1",
        "id: f1\nname: Taro\ncategory: CLASSIC_FLAVORS\njars: 6\nquantity: 6\nexpiryDate: 2025-06-10\n",
    );

    pantry()
        .current_dir(tmp.path())
        .args(["alerts", "--today", "2025-06-13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expired"))
        .stdout(predicate::str::contains(
            "Taro (flavor) expired 3 day(s) ago, on 2025-06-10",
        ))
        .stdout(predicate::str::contains("1 alert(s) found"));
}

#[test]
fn test_alerts_reports_expiring_soon() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "pantry/ingredients",
        "i1",
        "id: i1\nname: Fresh Milk\ncategory: DAIRY_EGGS\nquantity: 400\nexpiryDate: 2025-06-18\n",
    );

    pantry()
        .current_dir(tmp.path())
        .args(["alerts", "--today", "2025-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expiring Soon"))
        .stdout(predicate::str::contains(
            "Fresh Milk (ingredient) expires in 3 day(s), on 2025-06-18",
        ));
}

#[test]
fn test_alerts_expiring_today() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "pantry/ingredients",
        "i1",
        "id: i1\nname: Fresh Milk\ncategory: DAIRY_EGGS\nquantity: 400\nexpiryDate: 2025-06-15\n",
    );

    pantry()
        .current_dir(tmp.path())
        .args(["alerts", "--today", "2025-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("expires today, on 2025-06-15"));
}

#[test]
fn test_alerts_reports_critical_stock_with_measure() {
    let tmp = setup_test_project();
    seed_flavor(&tmp, "f1", "Okinawa", 1.0);
    write_record(
        &tmp,
        "pantry/ingredients",
        "i1",
        "id: i1\nname: Grass Jelly\ncategory: TOPPINGS\nquantity: 40\nunit: grams\n",
    );

    pantry()
        .current_dir(tmp.path())
        .arg("alerts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Critical Stock"))
        .stdout(predicate::str::contains("Okinawa (flavor) down to 1 jars"))
        .stdout(predicate::str::contains(
            "Grass Jelly (ingredient) down to 40 grams",
        ));
}

#[test]
fn test_alerts_reports_due_maintenance() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "pantry/utensils",
        "u1",
        "id: u1\nname: Stand Mixer\ncategory: ELECTRICAL_EQUIPMENT\nquantity: 150\nnextMaintenance: 2025-06-01\n",
    );

    pantry()
        .current_dir(tmp.path())
        .args(["alerts", "--today", "2025-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maintenance Due"))
        .stdout(predicate::str::contains("Stand Mixer due since 2025-06-01"));
}

#[test]
fn test_alerts_most_overdue_first() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "pantry/flavors",
        "f1",
        "id: f1\nname: Taro\ncategory: CLASSIC_FLAVORS\njars: 6\nquantity: 6\nexpiryDate: 2025-06-12\n",
    );
    write_record(
        &tmp,
        "pantry/flavors",
        "f2",
        "id: f2\nname: Matcha\ncategory: CLASSIC_FLAVORS\njars: 6\nquantity: 6\nexpiryDate: 2025-06-02\n",
    );

    let output = pantry()
        .current_dir(tmp.path())
        .args(["alerts", "--today", "2025-06-15"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output_str = String::from_utf8_lossy(&output);
    let matcha_pos = output_str.find("Matcha").expect("Matcha not found");
    let taro_pos = output_str.find("Taro").expect("Taro not found");
    assert!(
        matcha_pos < taro_pos,
        "most overdue record should be listed first"
    );
}

#[test]
fn test_alerts_days_override_widens_window() {
    let tmp = setup_test_project();
    // 20 days out: quiet under the stock 14-day flavor window.
    write_record(
        &tmp,
        "pantry/flavors",
        "f1",
        "id: f1\nname: Taro\ncategory: CLASSIC_FLAVORS\njars: 6\nquantity: 6\nexpiryDate: 2025-07-05\n",
    );

    pantry()
        .current_dir(tmp.path())
        .args(["alerts", "--today", "2025-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No alerts."));

    pantry()
        .current_dir(tmp.path())
        .args(["alerts", "--today", "2025-06-15", "--days", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expiring Soon"))
        .stdout(predicate::str::contains("Taro"));
}

#[test]
fn test_alerts_days_override_ignores_utensils() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "pantry/utensils",
        "u1",
        "id: u1\nname: Piping Bags\ncategory: DECORATING_TOOLS\nquantity: 150\n",
    );

    pantry()
        .current_dir(tmp.path())
        .args(["alerts", "--days", "3650"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No alerts."));
}

#[test]
fn test_alerts_counts_every_section() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "pantry/flavors",
        "f1",
        "id: f1\nname: Taro\ncategory: CLASSIC_FLAVORS\njars: 1\nquantity: 1\nexpiryDate: 2025-06-10\n",
    );
    write_record(
        &tmp,
        "pantry/utensils",
        "u1",
        "id: u1\nname: Stand Mixer\ncategory: ELECTRICAL_EQUIPMENT\nquantity: 150\nnextMaintenance: 2025-06-01\n",
    );

    // Taro is both expired and critical, the mixer is due: three alerts.
    pantry()
        .current_dir(tmp.path())
        .args(["alerts", "--today", "2025-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 alert(s) found"));
}

#[test]
fn test_alerts_json_format() {
    let tmp = setup_test_project();
    write_record(
        &tmp,
        "pantry/flavors",
        "f1",
        "id: f1\nname: Taro\ncategory: CLASSIC_FLAVORS\njars: 6\nquantity: 6\nexpiryDate: 2025-06-10\n",
    );

    pantry()
        .current_dir(tmp.path())
        .args(["alerts", "--today", "2025-06-13", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"expired\""))
        .stdout(predicate::str::contains("\"name\": \"Taro\""))
        .stdout(predicate::str::contains("\"days\": -3"));
}
