mod cli;
mod config;
mod ingest_cmd;
mod parse_cmd;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::AlmanacConfig;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Ingest(args) => ingest_cmd::run(args, cli.log_level.as_deref()),
        Command::Parse(args) => parse_cmd::run(args, cli.log_level.as_deref()),
        Command::Days => {
            for day in almanac_core::all_day_labels() {
                println!("{day}");
            }
            Ok(())
        }
    }
}

/// Starts file logging from the resolved config; a CLI level wins over the file.
pub(crate) fn start_logging(config: &AlmanacConfig, cli_level: Option<&str>) -> Result<()> {
    let level = cli_level
        .or(config.log_level.as_deref())
        .unwrap_or(almanac_core::default_log_level());
    let log_dir = config.resolved_log_dir()?;
    almanac_core::init_logging(level, &log_dir)
        .with_context(|| format!("failed to start logging in {}", log_dir.display()))
}
