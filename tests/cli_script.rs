use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const SARAH: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
const ALICE: &str = "ST1STUDENT1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJS";

fn config_home(extra: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let config = format!(
        r#"{{ "wallet_connect_delay_ms": 0, "ui_color_enabled": false{} }}"#,
        extra
    );
    std::fs::write(dir.path().join("config.json"), config).unwrap();
    dir
}

fn script(home: &TempDir, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("teacher_payouts_cli")
        .unwrap()
        .env("TEACHER_PAYOUTS_CLI_SCRIPT", "1")
        .env("TEACHER_PAYOUTS_HOME", home.path())
        .write_stdin(input.to_string())
        .assert()
}

#[test]
fn script_mode_shows_seeded_dashboard() {
    let home = config_home("");
    script(&home, "dashboard\nexit\n")
        .success()
        .stdout(contains("3 of 3"))
        .stdout(contains("Completion rate"))
        .stdout(contains("25%"))
        .stdout(contains("Dr. Elena Martinez"));
}

#[test]
fn completion_pays_teacher_and_updates_dashboard() {
    let home = config_home("");
    let input = format!(
        "complete {SARAH} {ALICE} \"Advanced Mathematics\"\nteacher {SARAH}\nexit\n"
    );
    script(&home, &input)
        .success()
        .stdout(contains(
            "Paid Alice Johnson -> Dr. Sarah Smith for Advanced Mathematics",
        ))
        .stdout(contains("Tx hash: 0x"))
        .stdout(contains("9.9 STX"))
        .stdout(contains("Existing enrollment marked completed."));
}

#[test]
fn register_then_fund_new_teacher() {
    let home = config_home(r#", "seed_sample_data": false"#);
    let input = "register \"Dr. Ada Lovelace\" ST1ADA Computing 2.5\nfund ST1ADA 1.5\nteachers\n";
    script(&home, input)
        .success()
        .stdout(contains("Registered Dr. Ada Lovelace (Computing) [active]"))
        .stdout(contains("New balance: 4.0 STX"))
        .stdout(contains("Dr. Ada Lovelace"));
}

#[test]
fn failures_are_reported_and_the_shell_continues() {
    let home = config_home("");
    let input = "fund ST1NOBODY 5\nregister \"Dr. Blank\" ST1BLANK \"\" 1\ndashbord\nwallet\n";
    script(&home, input)
        .success()
        .stdout(contains("Teacher not found: ST1NOBODY"))
        .stdout(contains("Please fill in all fields"))
        .stdout(contains("Suggestion: `dashboard`?"))
        .stdout(contains("Wallet disconnected."));
}

#[test]
fn underfunded_teacher_cannot_pay() {
    let home = config_home(r#", "seed_sample_data": false"#);
    let input = "register Broke ST1BROKE Art 0.05\ncomplete ST1BROKE ST1NOONE Painting\npayouts\n";
    script(&home, input)
        .success()
        .stdout(contains("Insufficient balance for Broke"))
        .stdout(contains("No payouts match."));
}

#[test]
fn wallet_connects_and_disconnects() {
    let home = config_home("");
    script(&home, "connect\nwallet\ndisconnect\nwallet\n")
        .success()
        .stdout(contains(
            "Wallet connected: ST1MOCKWALLET123456789ABCDEFGHIJKLMNOPQRST",
        ))
        .stdout(contains("Wallet disconnected."));
}

#[test]
fn export_prints_ledger_json() {
    let home = config_home("");
    script(&home, "export\n")
        .success()
        .stdout(contains("\"teachers\""))
        .stdout(contains("\"registered_date\": \"2024-01-15\""))
        .stdout(contains("\u{1b}[").not());
}

#[test]
fn config_set_is_persisted() {
    let home = config_home("");
    script(&home, "config set currency_label uSTX\nconfig\n")
        .success()
        .stdout(contains("Set currency_label = uSTX"));

    let stored = std::fs::read_to_string(home.path().join("config.json")).unwrap();
    assert!(stored.contains("\"currency_label\": \"uSTX\""));
}

#[test]
fn analytics_reports_success_rate_and_transactions() {
    let home = config_home("");
    script(&home, "analytics\n")
        .success()
        .stdout(contains("Success rate"))
        .stdout(contains("100%"))
        .stdout(contains("Transactions"));
}

#[test]
fn extra_arguments_print_usage() {
    let home = config_home("");
    let input = format!("fund {SARAH} 1 2\nteacher {SARAH}\n");
    script(&home, &input)
        .success()
        .stdout(contains("Usage: fund <address> <amount>"))
        .stdout(contains("10.0 STX"));
}
