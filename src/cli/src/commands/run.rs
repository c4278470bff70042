//! Run command: applies a JSON script to a fresh bank.

use crate::errors::CliError;
use crate::script::{RunOutcome, Script};
use ledger_core::Bank;
use std::path::Path;
use tracing::{debug, info};

/// Loads the script at `script_path` and applies it to a new bank.
pub fn run<P: AsRef<Path>>(script_path: P, keep_going: bool) -> Result<(Bank, RunOutcome), CliError> {
    let script_path = script_path.as_ref();
    info!("Running script: {}", script_path.display());

    let script = Script::from_file(script_path)?;
    debug!(
        accounts = script.accounts.len(),
        operations = script.operations.len(),
        "script loaded"
    );

    let mut bank = Bank::new();
    let outcome = script.apply(&mut bank, keep_going)?;
    Ok((bank, outcome))
}
