//! Tests for the CLI harness.

use ledger_cli::commands::{demo, run};
use ledger_cli::{CliConfig, CliError};
use ledger_core::{Bank, ErrorKind, TransactionType};
use std::fs;
use tempfile::tempdir;

const SCRIPT: &str = r#"{
    "accounts": [
        { "name": "John Doe", "initialDeposit": 1000 },
        { "name": "Jane Doe", "initialDeposit": 500 }
    ],
    "operations": [
        { "deposit": { "account": 0, "amount": 500 } },
        { "withdraw": { "account": 0, "amount": 200 } },
        { "transfer": { "from": 0, "to": 1, "amount": 300 } }
    ]
}"#;

/// Tests that the demo command reports the reference outcome.
#[test]
fn test_demo_report() {
    let mut bank = Bank::new();
    let report = demo::run(&mut bank).unwrap();

    assert_eq!(report.john_final_balance, 1000);
    assert_eq!(report.jane_final_balance, 800);
    assert_eq!(report.john_transaction_history.len(), 3);
    assert_eq!(
        report.jane_transaction_history[0].transaction_type(),
        TransactionType::Received
    );
    assert_eq!(bank.len(), 2);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["johnFinalBalance"], 1000);
    assert_eq!(value["janeTransactionHistory"][0]["from"], "John Doe");
    assert_eq!(value["johnTransactionHistory"][2]["to"], "Jane Doe");
}

/// Tests that a script file produces the same state as the demo.
#[test]
fn test_run_script_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("script.json");
    fs::write(&path, SCRIPT).unwrap();

    let (bank, outcome) = run::run(&path, false).unwrap();
    assert_eq!(outcome.applied, 3);
    assert!(outcome.failures.is_empty());
    assert_eq!(bank.accounts()[0].balance(), 1000);
    assert_eq!(bank.accounts()[1].balance(), 800);
}

/// Tests that a failing operation aborts the run by default.
#[test]
fn test_run_script_aborts_on_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("script.json");
    fs::write(
        &path,
        r#"{
            "accounts": [{ "name": "John Doe", "initialDeposit": 10 }],
            "operations": [{ "withdraw": { "account": 0, "amount": 11 } }]
        }"#,
    )
    .unwrap();

    match run::run(&path, false) {
        Err(CliError::CoreError(e)) => assert_eq!(e.kind(), ErrorKind::InsufficientFunds),
        other => panic!("unexpected result: {:?}", other.map(|(_, outcome)| outcome)),
    }
}

/// Tests that unreadable scripts surface as file or JSON errors.
#[test]
fn test_run_script_bad_input() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(run::run(&missing, false), Err(CliError::FileError(_))));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(run::run(&broken, false), Err(CliError::JsonError(_))));
}

/// Tests loading a configuration file written by the CLI.
#[test]
fn test_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let mut config = CliConfig::default();
    config.color = false;
    config.to_file(&path).unwrap();

    let loaded = CliConfig::from_file(&path).unwrap();
    assert!(!loaded.color);
    assert_eq!(loaded.log_level, config.log_level);
}
