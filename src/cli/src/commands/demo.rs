//! Demo command: the reference two-account scenario.

use crate::errors::CliError;
use ledger_core::{Balance, Bank, Transaction};
use serde::Serialize;
use tracing::info;

/// Final state of the two demo accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoReport {
    /// John's balance after all operations
    pub john_final_balance: Balance,
    /// Jane's balance after all operations
    pub jane_final_balance: Balance,
    /// John's history
    pub john_transaction_history: Vec<Transaction>,
    /// Jane's history
    pub jane_transaction_history: Vec<Transaction>,
}

/// Runs the demo scenario against `bank` and reports the two accounts.
///
/// Opens John Doe with 1000 and Jane Doe with 500, deposits 500 and withdraws 200 on John's
/// account, then transfers 300 from John to Jane.
pub fn run(bank: &mut Bank) -> Result<DemoReport, CliError> {
    let john = bank.create_account("John Doe", 1000)?;
    let jane = bank.create_account("Jane Doe", 500)?;
    info!(%john, %jane, "demo accounts created");

    bank.deposit(john, 500)?;
    bank.withdraw(john, 200)?;
    bank.transfer(john, jane, 300)?;

    let john = bank.account(john)?;
    let jane = bank.account(jane)?;
    Ok(DemoReport {
        john_final_balance: john.check_balance(),
        jane_final_balance: jane.check_balance(),
        john_transaction_history: john.transaction_history().to_vec(),
        jane_transaction_history: jane.transaction_history().to_vec(),
    })
}
