//! Command line options for the ledger CLI.

use std::path::PathBuf;
use structopt::StructOpt;

/// Command line arguments for the ledger CLI.
#[derive(Debug, StructOpt)]
#[structopt(name = "ledger", about = "In-memory banking ledger")]
pub struct Opt {
    /// Path to the configuration file
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Print reports as JSON
    #[structopt(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[structopt(long, global = true)]
    pub no_color: bool,

    /// Subcommand to run
    #[structopt(subcommand)]
    pub cmd: Command,
}

/// Subcommands for the ledger CLI.
#[derive(Debug, StructOpt)]
pub enum Command {
    /// Run the two-account demo scenario
    #[structopt(name = "demo")]
    Demo,

    /// Apply a JSON script of operations to a fresh bank
    #[structopt(name = "run")]
    Run {
        /// Path to the script file
        #[structopt(parse(from_os_str))]
        script: PathBuf,

        /// Record failing operations and continue instead of aborting
        #[structopt(long)]
        keep_going: bool,
    },
}
