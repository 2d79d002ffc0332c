//! Cinematch - content-based movie recommendations
//!
//! Finds the movie whose title matches a query and lists the movies whose
//! keywords or overview are most similar to it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cinematch_core::error::{CinematchError, ExitCode as CinematchExitCode};
use cinematch_core::format::OutputFormat;
use cinematch_core::logging;
use cli::Cli;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !is_informational(&err) && wants_json_errors(env::args()) => {
            let error = parse_failure(&err);
            eprintln!("{}", error.to_json());
            return exit_with(error.exit_code());
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(CinematchExitCode::Success),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            exit_with(e.exit_code())
        }
    }
}

fn exit_with(code: CinematchExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Help and version output go through clap unchanged
fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

/// `--format json` on the raw command line, checked before clap has a `Cli`
fn wants_json_errors(args: impl Iterator<Item = String>) -> bool {
    let args: Vec<String> = args.skip(1).collect();
    args.iter().any(|a| a == "--format=json")
        || args.windows(2).any(|w| w[0] == "--format" && w[1] == "json")
}

/// Map a clap parse failure onto the error taxonomy.
///
/// The only conflicting argument cinematch defines is a repeated `--format`.
fn parse_failure(err: &clap::Error) -> CinematchError {
    match err.kind() {
        ErrorKind::ArgumentConflict => CinematchError::DuplicateFormat,
        ErrorKind::Io | ErrorKind::Format => CinematchError::Other(err.to_string()),
        _ => CinematchError::UsageError(err.to_string()),
    }
}
