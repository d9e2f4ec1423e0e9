//! End-to-end tests driving the tally binary
//!
//! Each test points TALLY_DATA_DIR at its own temp directory so the ledger
//! file is fully isolated.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_DATA_DIR", data_dir.path());
    cmd
}

fn seed(data_dir: &TempDir) {
    let entries = [
        ("expense", "100", "Dining", "2025-01-01"),
        ("expense", "50", "Transit", "2025-01-05"),
        ("income", "5000", "Salary", "2025-01-10"),
        ("expense", "200", "Dining", "2025-02-01"),
        ("income", "1000", "Bonus", "2025-02-15"),
    ];
    for (kind, amount, category, date) in entries {
        tally(data_dir)
            .args(["add", kind, amount, "--category", category, "--date", date])
            .assert()
            .success();
    }
}

#[test]
fn add_and_list() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args([
            "add", "expense", "12.50", "--category", "Dining", "--date", "2025-01-01", "--note",
            "lunch",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense entry"));

    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-01"))
        .stdout(predicate::str::contains("Dining"))
        .stdout(predicate::str::contains("$12.50"))
        .stdout(predicate::str::contains("lunch"));
}

#[test]
fn totals_match_the_ledger() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    tally(&dir)
        .args(["total", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expense: $350.00"));

    tally(&dir)
        .args(["total", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total income: $6000.00"));
}

#[test]
fn monthly_report() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    tally(&dir)
        .args(["report", "expense", "--by", "month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01"))
        .stdout(predicate::str::contains("$150.00"))
        .stdout(predicate::str::contains("2025-02"))
        .stdout(predicate::str::contains("$200.00"));
}

#[test]
fn category_report() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    tally(&dir)
        .args(["report", "expense", "--by", "category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dining"))
        .stdout(predicate::str::contains("$300.00"))
        .stdout(predicate::str::contains("Transit"))
        .stdout(predicate::str::contains("$50.00"));
}

#[test]
fn search_by_window_and_kind() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    // Three entries fall in the inclusive window, per the seeded dates
    tally(&dir)
        .args([
            "search", "--from", "2025-01-05", "--to", "2025-02-01", "--kind", "all",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transit"))
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Dining"))
        .stdout(predicate::str::contains("Bonus").not());
}

#[test]
fn search_with_no_match_prints_empty_listing() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    tally(&dir)
        .args(["search", "--category", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn ledger_survives_process_restarts() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    // Every invocation is a fresh process; the ledger must come back intact
    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Net: $5650.00"));
}

#[test]
fn corrupt_ledger_recovers_with_warning() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    let ledger = dir.path().join("data").join("ledger.json");
    std::fs::write(&ledger, "{ definitely not a ledger").unwrap();

    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("ledger file could not be read"))
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn export_csv() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    tally(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date,Kind,Category,Amount,Note"))
        .stdout(predicate::str::contains("2025-01-10,Income,Salary,5000.00,"));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "expense", "ten dollars"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid amount"));

    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}
