use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", dir.path())
        .env_remove("FINTRACK_BACKEND")
        .env_remove("FINTRACK_STORE_URL")
        .env_remove("FINTRACK_STORE_KEY");
    cmd
}

fn local(dir: &TempDir) -> Command {
    let mut cmd = fintrack(dir);
    cmd.args(["--backend", "local"]);
    cmd
}

fn init(dir: &TempDir) {
    fintrack(dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 14 default categories"));
}

fn add(dir: &TempDir, args: &[&str]) {
    local(dir)
        .args(["transaction", "add"])
        .args(args)
        .assert()
        .success();
}

#[test]
fn test_init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    fintrack(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded").not());
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn test_category_list_by_kind() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    local(&dir)
        .args(["category", "list", "--kind", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Rent").not());
}

#[test]
fn test_add_and_list_newest_first() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    add(&dir, &["income", "1000", "-c", "Salary", "-d", "2024-05-01"]);
    add(
        &dir,
        &["expense", "100", "-c", "Food", "-d", "2024-05-10", "-m", "Lunch"],
    );

    let output = local(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 transaction(s)"))
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let newer = text.find("2024-05-10").unwrap();
    let older = text.find("2024-05-01").unwrap();
    assert!(newer < older);
    assert!(text.contains("Lunch"));
}

#[test]
fn test_category_must_match_kind() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    local(&dir)
        .args(["transaction", "add", "income", "50", "-c", "Rent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Rent' is not a category for income"));
}

#[test]
fn test_negative_amount_rejected() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    local(&dir)
        .args(["transaction", "add", "expense", "-5", "-c", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_monthly_report_with_details() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    add(&dir, &["income", "1000", "-c", "Salary", "-d", "2024-05-01"]);
    add(&dir, &["expense", "300", "-c", "Rent", "-d", "2024-05-02"]);
    add(&dir, &["expense", "100", "-c", "Food", "-d", "2024-05-10"]);
    add(&dir, &["expense", "999", "-c", "Food", "-d", "2024-04-30"]);

    local(&dir)
        .args([
            "report", "monthly", "-y", "2024", "-m", "5", "--details", "expense",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("May 2024"))
        .stdout(predicate::str::contains("S/ 600.00"))
        .stdout(predicate::str::contains("Expenses by category"));
}

#[test]
fn test_monthly_report_csv_export() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    add(&dir, &["income", "1000", "-c", "Salary", "-d", "2024-05-01"]);
    add(&dir, &["expense", "300", "-c", "Rent", "-d", "2024-05-02"]);

    let csv_path = dir.path().join("may.csv");
    local(&dir)
        .args(["report", "monthly", "-y", "2024", "-m", "5", "-o"])
        .arg(&csv_path)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("Period,Section,Kind,Category,Amount,Transactions"));
    assert!(csv.contains("2024-05,net_savings,,,700.00,2"));
}

#[test]
fn test_report_years() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    add(&dir, &["income", "10", "-c", "Salary", "-d", "2023-01-01"]);
    add(&dir, &["income", "10", "-c", "Salary", "-d", "2024-01-01"]);

    local(&dir)
        .args(["report", "years"])
        .assert()
        .success()
        .stdout("2024\n2023\n");
}

#[test]
fn test_remote_backend_requires_secrets() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["--backend", "remote", "transaction", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Store URL is not configured"));
}

#[test]
fn test_config_hides_key() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .env("FINTRACK_STORE_URL", "https://db.example.com")
        .env("FINTRACK_STORE_KEY", "super-secret")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://db.example.com"))
        .stdout(predicate::str::contains("super-secret").not());
}

#[test]
fn test_invalid_date_format_setting_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"backend": "local", "date_format": "%Q"}"#,
    )
    .unwrap();

    fintrack(&dir)
        .args(["transaction", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format"));
}

#[test]
fn test_malformed_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    for amount in ["10.5é", "99999999999999999"] {
        local(&dir)
            .args(["transaction", "add", "expense", amount, "-c", "Food"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid amount"));
    }
}
