//! Core primitives for the in-memory banking ledger.
//!
//! This crate provides the account registry ([`Bank`]), the per-holder [`Account`] with its
//! balance and append-only history, and the immutable [`Transaction`] records produced by
//! deposits, withdrawals and transfers.

pub mod account;
pub mod bank;
pub mod errors;
pub mod transaction;
pub mod types;

// Re-export commonly used types
pub use account::Account;
pub use bank::Bank;
pub use errors::{CoreError, ErrorKind};
pub use transaction::{Transaction, TransactionType};
pub use types::{AccountId, Balance};
