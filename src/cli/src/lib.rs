//! Command line harness for the in-memory banking ledger.

pub mod commands;
pub mod config;
pub mod errors;
pub mod opts;
pub mod report;
pub mod script;

// Re-export commonly used types and functions
pub use commands::{demo, run};
pub use config::CliConfig;
pub use errors::CliError;
pub use script::{Operation, RunOutcome, Script};
