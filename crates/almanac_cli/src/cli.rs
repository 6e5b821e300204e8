use std::path::PathBuf;

use almanac_core::OccurrenceType;
use clap::{Parser, Subcommand, ValueEnum};

/// Almanac record normalizer.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Normalize \"on this day\" almanac entries into chronological records"
)]
pub struct Cli {
    /// Log level (trace|debug|info|warn|error); overrides the config file.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Ingest saved day pages into the SQLite store.
    Ingest(IngestArgs),
    /// Assemble one group from a text file and print records as JSON lines.
    Parse(ParseArgs),
    /// Print every day label of a leap year.
    Days,
}

/// Arguments for the `ingest` subcommand.
#[derive(clap::Args)]
pub struct IngestArgs {
    /// Path to TOML configuration file. `almanac.toml` is used when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the page directory from config.
    #[arg(long)]
    pub pages_dir: Option<PathBuf>,

    /// Override the database path from config.
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Day to ingest, e.g. `March_15`. Repeatable; all days when omitted.
    #[arg(long = "day")]
    pub days: Vec<String>,
}

/// Arguments for the `parse` subcommand.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// Path to TOML configuration file. `almanac.toml` is used when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Section the lines belong to.
    #[arg(long, value_enum)]
    pub kind: KindArg,

    /// Day the lines were listed under, e.g. `March_15`.
    #[arg(long)]
    pub day: String,

    /// Text file with one entry per line, without section markers.
    pub input: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Event,
    Birth,
    Death,
}

impl From<KindArg> for OccurrenceType {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Event => OccurrenceType::Event,
            KindArg::Birth => OccurrenceType::Birth,
            KindArg::Death => OccurrenceType::Death,
        }
    }
}
