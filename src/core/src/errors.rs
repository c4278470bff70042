//! Error types for the core crate.

use crate::types::{AccountId, Balance};
use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error when an amount or argument fails validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error when a withdrawal or transfer exceeds the source balance.
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        /// The requested amount
        required: Balance,
        /// The balance of the source account
        available: Balance,
    },

    /// Error when a handle does not refer to an account of this bank.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Error when crediting an account would overflow its balance.
    #[error("Balance overflow: {balance} + {amount}")]
    BalanceOverflow {
        /// The balance before the credit
        balance: Balance,
        /// The amount being credited
        amount: Balance,
    },
}

/// Coarse classification of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A non-positive amount or a negative initial deposit.
    InvalidArgument,
    /// The source account cannot cover the amount.
    InsufficientFunds,
    /// An unknown account handle.
    NotFound,
    /// An arithmetic overflow on a credit.
    Overflow,
}

impl CoreError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            CoreError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            CoreError::AccountNotFound(_) => ErrorKind::NotFound,
            CoreError::BalanceOverflow { .. } => ErrorKind::Overflow,
        }
    }
}
