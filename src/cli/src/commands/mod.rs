//! Commands for the ledger CLI.

pub mod demo;
pub mod run;
