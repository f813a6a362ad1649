use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn trends(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trends").unwrap();
    cmd.env("LEDGER_TRENDS_DATA_DIR", dir.path())
        .env("LEDGER_TRENDS_TODAY", "2026-10-19")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn empty_ledger_shows_no_accounts_message() {
    let dir = TempDir::new().unwrap();
    trends(&dir)
        .arg("trend")
        .assert()
        .success()
        .stdout(predicate::str::contains("No accounts yet"));

    trends(&dir)
        .args(["trend", "--kind", "budgets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions recorded"));
}

#[test]
fn account_trend_walks_back_from_live_balance() {
    let dir = TempDir::new().unwrap();
    trends(&dir)
        .args(["account", "create", "a1", "--balance", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created account: a1"));

    trends(&dir)
        .args(["transaction", "add", "-100", "--kind", "expenses", "--account", "a1", "--date", "2026-03-01"])
        .assert()
        .success();

    trends(&dir)
        .args(["trend", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "a1,false,600.00,600.00,500.00,500.00,500.00,500.00,500.00,500.00,500.00,500.00,,",
        ));

    trends(&dir)
        .arg("trend")
        .assert()
        .success()
        .stdout(predicate::str::contains("Net worth at end of Oct: $500.00"));
}

#[test]
fn liability_counts_against_net_worth() {
    let dir = TempDir::new().unwrap();
    trends(&dir)
        .args(["account", "create", "Checking", "-b", "200"])
        .assert()
        .success();
    trends(&dir)
        .args(["account", "create", "Visa", "-t", "credit", "-b", "300"])
        .assert()
        .success();

    trends(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$100.00"));

    trends(&dir)
        .args(["trend", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"net_worth\": -10000"));
}

#[test]
fn import_then_budget_trend_and_export_file() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("ledger.csv");
    fs::write(
        &csv_path,
        "date,amount,kind\n2026-01-15,2500,income\n2026-01-20,-40,expenses\nbad,1,income\n",
    )
    .unwrap();

    trends(&dir)
        .arg("import")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 transaction(s)"))
        .stdout(predicate::str::contains("Skipped 1 row(s)"));

    let out = dir.path().join("budgets.yaml");
    trends(&dir)
        .args(["trend", "--kind", "budgets", "--format", "yaml", "--output"])
        .arg(&out)
        .assert()
        .success();

    let yaml = fs::read_to_string(&out).unwrap();
    assert!(yaml.contains("kind: budgets"));
    assert!(yaml.contains("- 250000"));
    assert!(yaml.contains("- 4000"));
}

#[test]
fn invalid_input_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    trends(&dir)
        .args(["trend", "--kind", "weekly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid trend kind"));

    trends(&dir)
        .args(["account", "show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found: missing"));
}

#[test]
fn save_writes_into_export_directory() {
    let dir = TempDir::new().unwrap();
    trends(&dir)
        .args(["account", "create", "a1", "--balance", "500"])
        .assert()
        .success();

    trends(&dir)
        .args(["trend", "--year", "2026", "--format", "csv", "--save"])
        .assert()
        .success()
        .stderr(predicate::str::contains("accounts-2026.csv"));

    let saved = fs::read_to_string(dir.path().join("exports").join("accounts-2026.csv")).unwrap();
    assert!(saved.contains("a1,false,500.00"));

    trends(&dir)
        .args(["trend", "--save"])
        .assert()
        .failure();
}
