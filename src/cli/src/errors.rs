//! Error types for the ledger CLI.

use ledger_core::CoreError;
use std::error::Error as StdError;
use std::fmt;

/// Errors that can occur in the ledger CLI.
#[derive(Debug)]
pub enum CliError {
    /// Error when a ledger operation fails.
    CoreError(CoreError),

    /// Error when a file operation fails.
    FileError(std::io::Error),

    /// Error when JSON serialization or deserialization fails.
    JsonError(serde_json::Error),

    /// Error when a script refers to an account it did not declare.
    UnknownAccount(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::CoreError(e) => write!(f, "Ledger error: {}", e),
            CliError::FileError(e) => write!(f, "File error: {}", e),
            CliError::JsonError(e) => write!(f, "JSON error: {}", e),
            CliError::UnknownAccount(index) => {
                write!(f, "Unknown account: script declares no account at index {}", index)
            }
        }
    }
}

impl StdError for CliError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            CliError::CoreError(e) => Some(e),
            CliError::FileError(e) => Some(e),
            CliError::JsonError(e) => Some(e),
            CliError::UnknownAccount(_) => None,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(error: CoreError) -> Self {
        CliError::CoreError(error)
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::FileError(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::JsonError(error)
    }
}
