use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pocket(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocket").unwrap();
    cmd.env("POCKET_BUDGET_DATA_DIR", data_dir.path())
        .env_remove("POCKET_BUDGET_LOG");
    cmd
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized Pocket Budget"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("currencies.json").exists());
}

#[test]
fn income_set_and_show() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["income", "set", "2500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[success] Income updated successfully!"));

    pocket(&dir)
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Income: ₹2500.00"));
}

#[test]
fn invalid_income_is_rejected() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["income", "set", "-100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[error]"));

    pocket(&dir)
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹0.00"));
}

#[test]
fn groceries_summary() {
    let dir = TempDir::new().unwrap();

    pocket(&dir).args(["income", "set", "1000"]).assert().success();
    pocket(&dir)
        .args(["txn", "add", "Groceries", "-50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction added!"));

    pocket(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("₹950.00"))
        .stdout(predicate::str::contains("₹50.00"));
}

#[test]
fn transactions_list_newest_first() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["txn", "add", "Rent", "-900", "--date", "2024-05-01"])
        .assert()
        .success();
    pocket(&dir)
        .args(["txn", "add", "Salary bonus", "200", "--date", "2024-05-03"])
        .assert()
        .success();

    let output = pocket(&dir).args(["txn", "list"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let bonus = stdout.find("Salary bonus").unwrap();
    let rent = stdout.find("Rent").unwrap();
    assert!(bonus < rent);
    assert!(stdout.contains("+₹200.00"));
    assert!(stdout.contains("-₹900.00"));
}

#[test]
fn empty_list_message() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions yet."));
}

#[test]
fn missing_description_is_rejected() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["txn", "add", "   ", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn delete_out_of_range_index() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["txn", "add", "Coffee", "-3.5", "--date", "2024-05-02"])
        .assert()
        .success();

    pocket(&dir)
        .args(["txn", "delete", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No transaction at index -1"));

    pocket(&dir)
        .args(["txn", "delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No transaction at index 5"));

    pocket(&dir)
        .args(["txn", "delete", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction deleted."));

    pocket(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions yet."));
}

#[test]
fn currency_set_changes_symbol() {
    let dir = TempDir::new().unwrap();

    pocket(&dir).args(["income", "set", "10"]).assert().success();
    pocket(&dir)
        .args(["currency", "set", "€"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency set to €"));

    pocket(&dir)
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€10.00"));
}

#[test]
fn currency_list_falls_back_without_catalog() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["currency", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[warning] Error loading currency list. Using defaults."))
        .stdout(predicate::str::contains("INR"));
}

#[test]
fn currency_list_uses_initialized_catalog() {
    let dir = TempDir::new().unwrap();

    pocket(&dir).arg("init").assert().success();
    pocket(&dir)
        .args(["currency", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Using defaults").not())
        .stdout(predicate::str::contains("USD"));
}

#[test]
fn clear_declined_keeps_data() {
    let dir = TempDir::new().unwrap();

    pocket(&dir).args(["income", "set", "1000"]).assert().success();

    pocket(&dir)
        .arg("clear")
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    pocket(&dir)
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹1000.00"));
}

#[test]
fn clear_confirmed_resets() {
    let dir = TempDir::new().unwrap();

    pocket(&dir).args(["income", "set", "1000"]).assert().success();
    pocket(&dir).args(["currency", "set", "$"]).assert().success();

    pocket(&dir)
        .arg("clear")
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared!"));

    pocket(&dir)
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Income: ₹0.00"));
}

#[test]
fn clear_force_skips_prompt() {
    let dir = TempDir::new().unwrap();

    pocket(&dir).args(["income", "set", "1000"]).assert().success();
    pocket(&dir)
        .args(["clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared!"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("storage.json"))
        .stdout(predicate::str::contains("currencies.json"));
}
