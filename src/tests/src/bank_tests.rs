//! Tests for the bank and account operations.

use anyhow::Result;
use ledger_core::{Bank, CoreError, ErrorKind, TransactionType};

/// Tests the reference two-account scenario end to end.
#[test]
fn test_reference_scenario() -> Result<()> {
    let mut bank = Bank::new();

    // Create the accounts
    let john = bank.create_account("John Doe", 1000)?;
    let jane = bank.create_account("Jane Doe", 500)?;
    assert_eq!(bank.check_balance(john)?, 1000);
    assert_eq!(bank.check_balance(jane)?, 500);
    assert!(bank.account(john)?.transaction_history().is_empty());

    // Operate on John's account
    bank.deposit(john, 500)?;
    assert_eq!(bank.check_balance(john)?, 1500);
    bank.withdraw(john, 200)?;
    assert_eq!(bank.check_balance(john)?, 1300);

    // Transfer from John to Jane
    bank.transfer(john, jane, 300)?;
    assert_eq!(bank.check_balance(john)?, 1000);
    assert_eq!(bank.check_balance(jane)?, 800);

    // Check the histories
    let history: Vec<_> = bank
        .account(john)?
        .transaction_history()
        .iter()
        .map(|t| (t.transaction_type(), t.amount(), t.counterparty().map(str::to_string)))
        .collect();
    assert_eq!(
        history,
        vec![
            (TransactionType::Deposit, 500, None),
            (TransactionType::Withdrawal, 200, None),
            (TransactionType::Transfer, 300, Some("Jane Doe".to_string())),
        ]
    );

    let received = bank.account(jane)?.transaction_history();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].transaction_type(), TransactionType::Received);
    assert_eq!(received[0].amount(), 300);
    assert_eq!(received[0].from(), Some("John Doe"));
    assert_eq!(received[0].to(), None);

    Ok(())
}

/// Tests the boundary withdrawals from the reference scenario.
#[test]
fn test_boundary_withdrawals() -> Result<()> {
    let mut bank = Bank::new();
    let john = bank.create_account("John Doe", 1000)?;

    let err = bank.withdraw(john, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = bank.withdraw(john, 999999).unwrap_err();
    assert_eq!(
        err,
        CoreError::InsufficientFunds {
            required: 999999,
            available: 1000,
        }
    );

    // Neither attempt changed the account
    assert_eq!(bank.check_balance(john)?, 1000);
    assert!(bank.account(john)?.transaction_history().is_empty());
    Ok(())
}

/// Tests that non-positive amounts are rejected by every operation.
#[test]
fn test_non_positive_amounts_rejected() -> Result<()> {
    let mut bank = Bank::new();
    let john = bank.create_account("John Doe", 1000)?;
    let jane = bank.create_account("Jane Doe", 500)?;

    for amount in [0, -1, -1000] {
        assert_eq!(bank.deposit(john, amount).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(bank.withdraw(john, amount).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            bank.transfer(john, jane, amount).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    assert_eq!(bank.check_balance(john)?, 1000);
    assert_eq!(bank.check_balance(jane)?, 500);
    assert!(bank.account(john)?.transaction_history().is_empty());
    assert!(bank.account(jane)?.transaction_history().is_empty());
    Ok(())
}

/// Tests that an overdrawing transfer changes neither side.
#[test]
fn test_transfer_insufficient_funds() -> Result<()> {
    let mut bank = Bank::new();
    let john = bank.create_account("John Doe", 1000)?;
    let jane = bank.create_account("Jane Doe", 500)?;

    let err = bank.transfer(john, jane, 1500).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InsufficientFunds);

    assert_eq!(bank.check_balance(john)?, 1000);
    assert_eq!(bank.check_balance(jane)?, 500);
    assert!(bank.account(jane)?.transaction_history().is_empty());
    Ok(())
}

/// Tests that a negative opening deposit does not register an account.
#[test]
fn test_negative_initial_deposit() -> Result<()> {
    let mut bank = Bank::new();
    bank.create_account("John Doe", 1000)?;

    let err = bank.create_account("Jane Doe", -500).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(bank.len(), 1);
    assert_eq!(bank.find_by_name("Jane Doe").count(), 0);
    Ok(())
}

/// Tests that a self-transfer nets to zero but records both sides.
#[test]
fn test_self_transfer() -> Result<()> {
    let mut bank = Bank::new();
    let john = bank.create_account("John Doe", 1000)?;

    bank.transfer(john, john, 300)?;
    assert_eq!(bank.check_balance(john)?, 1000);

    let history = bank.account(john)?.transaction_history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].transaction_type(), TransactionType::Transfer);
    assert_eq!(history[0].to(), Some("John Doe"));
    assert_eq!(history[1].transaction_type(), TransactionType::Received);
    assert_eq!(history[1].from(), Some("John Doe"));
    assert!(bank.account(john)?.is_reconciled());

    // Sufficiency still applies
    let err = bank.transfer(john, john, 1001).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InsufficientFunds);
    Ok(())
}

/// Tests that a handle issued by one bank cannot touch another bank's accounts.
#[test]
fn test_foreign_handle_rejected() -> Result<()> {
    let mut bank_a = Bank::new();
    let alice = bank_a.create_account("Alice", 100)?;

    let mut bank_b = Bank::new();
    let bob = bank_b.create_account("Bob", 50)?;

    let err = bank_b.deposit(alice, 5).unwrap_err();
    assert_eq!(err, CoreError::AccountNotFound(alice));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(bank_b.withdraw(alice, 5).is_err());

    assert_eq!(bank_b.check_balance(bob)?, 50);
    assert_eq!(bank_a.check_balance(alice)?, 100);
    Ok(())
}

/// Tests that the balance read is stable without intervening mutations.
#[test]
fn test_check_balance_idempotent() -> Result<()> {
    let mut bank = Bank::new();
    let john = bank.create_account("John Doe", 1000)?;
    bank.deposit(john, 1)?;

    let first = bank.check_balance(john)?;
    let second = bank.check_balance(john)?;
    assert_eq!(first, second);
    Ok(())
}
