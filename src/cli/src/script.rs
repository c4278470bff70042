//! JSON scripts of ledger operations.
//!
//! A script declares the accounts to open and an ordered list of operations. Operations
//! refer to accounts by their position in the `accounts` list, since holder names may repeat.
//!
//! ```json
//! {
//!   "accounts": [
//!     { "name": "John Doe", "initialDeposit": 1000 },
//!     { "name": "Jane Doe", "initialDeposit": 500 }
//!   ],
//!   "operations": [
//!     { "deposit": { "account": 0, "amount": 500 } },
//!     { "withdraw": { "account": 0, "amount": 200 } },
//!     { "transfer": { "from": 0, "to": 1, "amount": 300 } }
//!   ]
//! }
//! ```

use crate::errors::CliError;
use ledger_core::{AccountId, Balance, Bank};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// An account to open before any operation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSpec {
    /// Holder name
    pub name: String,
    /// Opening balance, zero when omitted
    #[serde(default)]
    pub initial_deposit: Balance,
}

/// One step of a script, written as a single-key object named after the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Deposit into an account
    Deposit {
        /// Index of the account in the script
        account: usize,
        /// Amount to deposit
        amount: Balance,
    },
    /// Withdraw from an account
    Withdraw {
        /// Index of the account in the script
        account: usize,
        /// Amount to withdraw
        amount: Balance,
    },
    /// Transfer between two accounts
    Transfer {
        /// Index of the sending account
        from: usize,
        /// Index of the receiving account
        to: usize,
        /// Amount to transfer
        amount: Balance,
    },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Deposit { account, amount } => write!(f, "deposit {} into #{}", amount, account),
            Operation::Withdraw { account, amount } => {
                write!(f, "withdraw {} from #{}", amount, account)
            }
            Operation::Transfer { from, to, amount } => {
                write!(f, "transfer {} from #{} to #{}", amount, from, to)
            }
        }
    }
}

/// A full script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Accounts opened in order
    pub accounts: Vec<AccountSpec>,
    /// Operations applied in order
    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// An operation that was rejected while running with `keep_going`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationFailure {
    /// Position of the operation in the script
    pub index: usize,
    /// The rejected operation
    pub operation: Operation,
    /// Why it was rejected
    pub error: String,
}

/// Summary of a script run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOutcome {
    /// Number of operations that succeeded
    pub applied: usize,
    /// Operations that were rejected
    pub failures: Vec<OperationFailure>,
}

impl Script {
    /// Loads a script from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Ok(serde_json::from_str(&contents)?)
    }

    /// Opens the declared accounts in `bank` and applies every operation in order.
    ///
    /// Opening an account always aborts on failure, since later operations refer to accounts
    /// by position. A failing operation aborts the run unless `keep_going` is set, in which
    /// case it is recorded in the outcome and the run continues with the next operation.
    pub fn apply(&self, bank: &mut Bank, keep_going: bool) -> Result<RunOutcome, CliError> {
        let ids = self
            .accounts
            .iter()
            .map(|spec| bank.create_account(spec.name.as_str(), spec.initial_deposit))
            .collect::<Result<Vec<_>, _>>()?;

        let mut outcome = RunOutcome::default();
        for (index, operation) in self.operations.iter().enumerate() {
            match apply_operation(bank, &ids, operation) {
                Ok(()) => {
                    info!(index, %operation, "operation applied");
                    outcome.applied += 1;
                }
                Err(e) if keep_going => {
                    warn!(index, %operation, error = %e, "operation rejected");
                    outcome.failures.push(OperationFailure {
                        index,
                        operation: operation.clone(),
                        error: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(outcome)
    }
}

fn apply_operation(bank: &mut Bank, ids: &[AccountId], operation: &Operation) -> Result<(), CliError> {
    let resolve = |index: usize| ids.get(index).copied().ok_or(CliError::UnknownAccount(index));

    match *operation {
        Operation::Deposit { account, amount } => bank.deposit(resolve(account)?, amount)?,
        Operation::Withdraw { account, amount } => bank.withdraw(resolve(account)?, amount)?,
        Operation::Transfer { from, to, amount } => {
            bank.transfer(resolve(from)?, resolve(to)?, amount)?
        }
    }
    Ok(())
}
