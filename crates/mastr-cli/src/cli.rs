//! CLI argument definitions for the change feed.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mastr-feed",
    version,
    about = "Storage registry change feed - diff monthly snapshots",
    long_about = "Build a change feed from monthly snapshots of the storage unit registry.\n\n\
                  Reports new, updated and disappeared units per period, per-status\n\
                  totals and lifecycle milestones for every unit ever seen."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the change feed from a snapshot folder and print it as JSON.
    Feed(FeedArgs),

    /// List the loaded status, region and technology codes.
    Codes(CodesArgs),
}

#[derive(Parser)]
pub struct FeedArgs {
    /// Folder with one `YYYY-MM.json` snapshot per period.
    #[arg(value_name = "SNAPSHOT_DIR")]
    pub snapshot_dir: PathBuf,

    /// Code table file (default: $MASTR_CODES_FILE, then the built-in table).
    #[arg(long = "codes", value_name = "PATH")]
    pub codes: Option<PathBuf>,

    /// Feed options file (TOML).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Field never reported as changed. May be repeated.
    #[arg(long = "ignore-field", value_name = "FIELD")]
    pub ignore_fields: Vec<String>,

    /// Drop units below this net power in MW.
    #[arg(long = "min-power-mw", value_name = "MW")]
    pub min_power_mw: Option<i64>,

    /// Print compact JSON instead of pretty-printed JSON.
    #[arg(long = "compact")]
    pub compact: bool,
}

#[derive(Parser)]
pub struct CodesArgs {
    /// Code table file (default: $MASTR_CODES_FILE, then the built-in table).
    #[arg(long = "codes", value_name = "PATH")]
    pub codes: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
