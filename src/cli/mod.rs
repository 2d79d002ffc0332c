//! CLI argument parsing for cinematch
//!
//! Global flags select the data tables, configuration file, output format
//! and logging. With no subcommand the interactive prompt runs.

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cinematch_core::format::OutputFormat;

pub use args::{RecommendArgs, StatsArgs, TuningArgs};
use parse::parse_output_format;

/// Cinematch - content-based movie recommendations
#[derive(Parser, Debug)]
#[command(name = "cinematch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "CINEMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Movie metadata CSV (overrides config)
    #[arg(long, global = true)]
    pub movies: Option<PathBuf>,

    /// Keywords CSV (overrides config)
    #[arg(long, global = true)]
    pub keywords: Option<PathBuf>,

    /// Ratings CSV (overrides config)
    #[arg(long, global = true)]
    pub ratings: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "info", "cinematch_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend movies similar to the title matching a query
    Recommend(RecommendArgs),

    /// Prompt for queries until "exit"
    Interactive(TuningArgs),

    /// Summarize the loaded catalog
    Stats(StatsArgs),
}
