//! CLI integration tests
//!
//! Each test points the binary at its own temporary data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn daybudget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("daybudget").unwrap();
    cmd.env("DAYBUDGET_DATA_DIR", dir.path());
    cmd
}

fn init(dir: &TempDir, main: &str, limit: &str) {
    daybudget(dir)
        .args(["init", main, limit])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget initialized."));
}

#[test]
fn test_help_output() {
    let mut cmd = Command::cargo_bin("daybudget").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("transfer"))
        .stdout(predicate::str::contains("spend"))
        .stdout(predicate::str::contains("reset"));
}

#[test]
fn test_status_before_init_shows_setup() {
    let dir = TempDir::new().unwrap();
    daybudget(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget set up yet."));

    // An uninitialized ledger is never written
    assert!(!dir.path().join("data").join("ledger.json").exists());
}

#[test]
fn test_transfer_and_spend() {
    let dir = TempDir::new().unwrap();
    init(&dir, "1000", "150");

    daybudget(&dir)
        .arg("transfer")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transferred ₹150.00 from Main to Daily."));

    daybudget(&dir)
        .args(["spend", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spent ₹40.00. ₹110.00 left for today."));

    daybudget(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("₹850.00"))
        .stdout(predicate::str::contains("₹110.00 of ₹150.00 remaining"))
        .stdout(predicate::str::contains("-₹40.00"))
        .stdout(predicate::str::contains("+₹150.00"));
}

#[test]
fn test_overspending_fails_without_changes() {
    let dir = TempDir::new().unwrap();
    init(&dir, "1000", "150");
    daybudget(&dir).arg("transfer").assert().success();

    daybudget(&dir)
        .args(["spend", "200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient balance in daily account"));

    daybudget(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("₹150.00 of ₹150.00 remaining"));
}

#[test]
fn test_transfer_without_enough_in_main_fails() {
    let dir = TempDir::new().unwrap();
    init(&dir, "100", "150");

    daybudget(&dir)
        .arg("transfer")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient balance in main account"));
}

#[test]
fn test_invalid_amounts_rejected() {
    let dir = TempDir::new().unwrap();

    for args in [["init", "abc", "150"], ["init", "1000", "0"], ["init", "-5", "150"]] {
        daybudget(&dir).args(args).assert().failure();
    }
    daybudget(&dir)
        .arg("transfer")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn test_limit_change() {
    let dir = TempDir::new().unwrap();
    init(&dir, "1000", "150");

    daybudget(&dir)
        .args(["limit", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily limit changed: ₹150.00 -> ₹200.00"));

    daybudget(&dir)
        .arg("transfer")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transferred ₹200.00"));
}

#[test]
fn test_reset_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    init(&dir, "1000", "150");

    daybudget(&dir)
        .arg("reset")
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));
    assert!(dir.path().join("data").join("ledger.json").exists());

    daybudget(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data has been reset."));

    daybudget(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget set up yet."));
}

#[test]
fn test_history_and_export() {
    let dir = TempDir::new().unwrap();
    init(&dir, "1000", "150");
    daybudget(&dir).arg("transfer").assert().success();
    daybudget(&dir).args(["spend", "25.50"]).assert().success();

    daybudget(&dir)
        .args(["history", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spending"))
        .stdout(predicate::str::contains("Showing 1 of 2 transactions."));

    let csv_path = dir.path().join("history.csv");
    daybudget(&dir)
        .args(["export", csv_path.to_str().unwrap(), "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 transactions"));
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("ID,Timestamp,Description,Account,Type,Amount,Signed Amount"));
    assert!(csv.contains("Spending,daily,debit,25.50,-25.50"));

    let json_path = dir.path().join("ledger.json");
    daybudget(&dir)
        .args(["export", json_path.to_str().unwrap(), "--pretty"])
        .assert()
        .success();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["balances"]["daily"], 12450);
    assert_eq!(json["transactions"].as_array().unwrap().len(), 2);
}

#[test]
fn test_history_limit_footer_printed_once() {
    let dir = TempDir::new().unwrap();
    init(&dir, "1000", "150");
    daybudget(&dir).arg("transfer").assert().success();
    daybudget(&dir).args(["spend", "10"]).assert().success();

    let output = daybudget(&dir)
        .args(["history", "--limit", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Showing 1 of 2 transactions.").count(), 1);

    daybudget(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing").not());
}

#[test]
fn test_audit_log_records_operations() {
    let dir = TempDir::new().unwrap();
    init(&dir, "1000", "150");
    daybudget(&dir).arg("transfer").assert().success();

    daybudget(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("INITIALIZE"))
        .stdout(predicate::str::contains("DAILY_TRANSFER"));
}

#[test]
fn test_config_sets_currency() {
    let dir = TempDir::new().unwrap();

    daybudget(&dir)
        .args(["config", "--currency", "$"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol set to '$'."));

    init(&dir, "1000", "150");
    daybudget(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("$1000.00"));
}
