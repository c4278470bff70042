//! Text rendering of ledger state.

use colored::Colorize;
use ledger_core::{Account, Bank, Transaction, TransactionType};
use std::fmt::Write;

/// Renders one history record as a single line.
pub fn render_transaction(transaction: &Transaction) -> String {
    let label = match transaction.transaction_type() {
        TransactionType::Deposit | TransactionType::Received => {
            transaction.transaction_type().as_str().green()
        }
        TransactionType::Withdrawal | TransactionType::Transfer => {
            transaction.transaction_type().as_str().yellow()
        }
    };

    match transaction.counterparty() {
        Some(other) if transaction.to().is_some() => {
            format!("{} {} to {}", label, transaction.amount(), other)
        }
        Some(other) => format!("{} {} from {}", label, transaction.amount(), other),
        None => format!("{} {}", label, transaction.amount()),
    }
}

/// Renders an account header followed by its history, one record per line.
pub fn render_account(account: &Account) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", account.name().bold(), format!("balance {}", account.balance()).cyan());
    if account.transaction_history().is_empty() {
        let _ = writeln!(out, "  (no transactions)");
    }
    for transaction in account.transaction_history() {
        let _ = writeln!(out, "  {}", render_transaction(transaction));
    }
    out
}

/// Renders every account of the bank followed by the total holdings.
pub fn render_bank(bank: &Bank) -> String {
    let mut out = String::new();
    for (id, account) in bank.iter() {
        let _ = write!(out, "{} {}", format!("#{}", id.index()).dimmed(), render_account(account));
    }
    let _ = writeln!(out, "{} {}", "Total holdings:".green(), bank.total_holdings());
    out
}
