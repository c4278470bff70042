//! Command line harness for the in-memory banking ledger.

use anyhow::Result;
use colored::Colorize;
use ledger_cli::commands::{demo, run};
use ledger_cli::config::CliConfig;
use ledger_cli::opts::{Command, Opt};
use ledger_cli::report;
use ledger_core::Bank;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // Parse command line arguments
    let opt = Opt::from_args();

    // Load configuration
    let mut config = match &opt.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    if opt.json {
        config.json = true;
    }
    if opt.no_color {
        config.color = false;
    }

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    colored::control::set_override(config.color);

    match opt.cmd {
        Command::Demo => {
            let mut bank = Bank::new();
            let demo_report = demo::run(&mut bank)?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&demo_report)?);
            } else {
                print!("{}", report::render_bank(&bank));
                println!("{} {}", "John's balance:".green(), demo_report.john_final_balance);
                println!("{} {}", "Jane's balance:".green(), demo_report.jane_final_balance);
            }
        }
        Command::Run { script, keep_going } => {
            let (bank, outcome) = run::run(&script, keep_going)?;
            info!(applied = outcome.applied, failed = outcome.failures.len(), "script finished");
            if config.json {
                let value = serde_json::json!({ "bank": bank, "outcome": outcome });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print!("{}", report::render_bank(&bank));
                println!("{} {}", "Operations applied:".green(), outcome.applied);
                for failure in &outcome.failures {
                    println!(
                        "{} #{} {}: {}",
                        "Rejected".red(),
                        failure.index,
                        failure.operation,
                        failure.error
                    );
                }
            }
        }
    }

    Ok(())
}
