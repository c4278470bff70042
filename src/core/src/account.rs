//! A single holder's account: balance plus append-only transaction history.

use crate::errors::CoreError;
use crate::transaction::Transaction;
use crate::types::Balance;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// An account owned by a [`Bank`](crate::Bank).
///
/// The balance only changes through [`deposit`](Account::deposit),
/// [`withdraw`](Account::withdraw) and transfers settled by [`Bank::transfer`](crate::Bank::transfer),
/// each of which validates its input before touching any state and appends exactly one record
/// per affected side. A cloned account is a detached snapshot, not a view into the bank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    name: String,
    balance: Balance,
    #[serde(skip)]
    opening_balance: Balance,
    transaction_history: Vec<Transaction>,
}

impl Account {
    /// Creates an account with the given opening balance and an empty history.
    ///
    /// The caller is responsible for rejecting a negative opening balance.
    pub(crate) fn new(name: String, opening_balance: Balance) -> Self {
        Self {
            name,
            balance: opening_balance,
            opening_balance,
            transaction_history: Vec::new(),
        }
    }

    /// The holder's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current balance.
    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Returns the current balance. Same as [`balance`](Account::balance).
    pub fn check_balance(&self) -> Balance {
        self.balance
    }

    /// The balance the account was opened with.
    pub fn opening_balance(&self) -> Balance {
        self.opening_balance
    }

    /// All records in the order the operations happened.
    pub fn transaction_history(&self) -> &[Transaction] {
        &self.transaction_history
    }

    /// The most recent record, if any.
    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.transaction_history.last()
    }

    /// Whether the balance equals the opening balance plus the signed sum of the history.
    pub fn is_reconciled(&self) -> bool {
        let movements: Balance = self
            .transaction_history
            .iter()
            .map(Transaction::signed_amount)
            .sum();
        self.opening_balance + movements == self.balance
    }

    /// Adds `amount` to the balance.
    pub fn deposit(&mut self, amount: Balance) -> Result<(), CoreError> {
        ensure_positive(amount, "Deposit")?;
        let balance = self.credited(amount)?;

        self.balance = balance;
        self.transaction_history.push(Transaction::deposit(amount));
        debug!(account = %self.name, amount, balance, "deposit applied");
        Ok(())
    }

    /// Takes `amount` out of the balance.
    ///
    /// Positivity is checked before sufficiency, so `withdraw(0)` on an empty account reports
    /// an invalid argument rather than insufficient funds.
    pub fn withdraw(&mut self, amount: Balance) -> Result<(), CoreError> {
        ensure_positive(amount, "Withdrawal")?;
        self.ensure_covers(amount)?;

        self.balance -= amount;
        self.transaction_history.push(Transaction::withdrawal(amount));
        debug!(account = %self.name, amount, balance = self.balance, "withdrawal applied");
        Ok(())
    }

    /// Moves `amount` from this account to `recipient`.
    ///
    /// Both sides are validated first; once validation passes both balances and both histories
    /// are updated before returning. Holding two `&mut` borrows means the recipient is always a
    /// different account; see [`transfer_to_self`](Account::transfer_to_self) for the other case.
    pub(crate) fn transfer(
        &mut self,
        amount: Balance,
        recipient: &mut Account,
    ) -> Result<(), CoreError> {
        ensure_positive(amount, "Transfer")?;
        self.ensure_covers(amount)?;
        let recipient_balance = recipient.credited(amount)?;

        self.balance -= amount;
        recipient.balance = recipient_balance;

        self.transaction_history
            .push(Transaction::transfer(amount, recipient.name.as_str()));
        recipient
            .transaction_history
            .push(Transaction::received(amount, self.name.as_str()));

        debug!(
            from = %self.name,
            to = %recipient.name,
            amount,
            "transfer applied"
        );
        Ok(())
    }

    /// Transfers `amount` from this account to itself.
    ///
    /// Validated like any transfer. The balance is unchanged, and the history gains a
    /// `Transfer` record followed by a `Received` record, both naming this account.
    pub(crate) fn transfer_to_self(&mut self, amount: Balance) -> Result<(), CoreError> {
        ensure_positive(amount, "Transfer")?;
        self.ensure_covers(amount)?;

        self.transaction_history
            .push(Transaction::transfer(amount, self.name.as_str()));
        self.transaction_history
            .push(Transaction::received(amount, self.name.as_str()));
        debug!(account = %self.name, amount, "self-transfer applied");
        Ok(())
    }

    fn ensure_covers(&self, amount: Balance) -> Result<(), CoreError> {
        if amount > self.balance {
            warn!(account = %self.name, amount, balance = self.balance, "insufficient funds");
            return Err(CoreError::InsufficientFunds {
                required: amount,
                available: self.balance,
            });
        }
        Ok(())
    }

    fn credited(&self, amount: Balance) -> Result<Balance, CoreError> {
        self.balance
            .checked_add(amount)
            .ok_or(CoreError::BalanceOverflow {
                balance: self.balance,
                amount,
            })
    }
}

/// Rejects zero and negative amounts for the named operation.
fn ensure_positive(amount: Balance, operation: &str) -> Result<(), CoreError> {
    if amount <= 0 {
        warn!(operation, amount, "rejected non-positive amount");
        return Err(CoreError::InvalidArgument(format!(
            "{} amount must be positive, got {}",
            operation, amount
        )));
    }
    Ok(())
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {{ name: {}, balance: {}, transactions: {} }}",
            self.name,
            self.balance,
            self.transaction_history.len()
        )
    }
}
