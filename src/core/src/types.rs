//! Core types for the in-memory banking ledger.

use std::fmt;

/// Monetary amount, represented as a signed 128-bit integer.
///
/// Signed so that negative inputs can be expressed and rejected; a stored balance is never
/// negative.
pub type Balance = i128;

/// Handle to an account inside a [`Bank`](crate::Bank).
///
/// A handle records the bank that issued it and the account's position in that bank's
/// registry. Handles stay valid for the lifetime of the bank, since accounts are never
/// removed, and are refused by every other bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId {
    bank: u64,
    index: usize,
}

impl AccountId {
    pub(crate) fn new(bank: u64, index: usize) -> Self {
        Self { bank, index }
    }

    /// Returns the position of the account in the registry.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the identity of the bank that issued this handle.
    pub fn bank(&self) -> u64 {
        self.bank
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.index, self.bank)
    }
}
