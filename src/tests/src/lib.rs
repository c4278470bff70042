//! Integration tests for the in-memory banking ledger.

pub mod bank_tests;
pub mod cli_tests;
