//! Command-line interface for Steam identifier conversion.
//!
//! The binary is a thin adapter over `steamid_core::Session`: it resolves a
//! merged configuration, feeds the session one conversion, and writes the
//! resulting line. All state and formatting decisions live in the core
//! crate.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod convert;
mod error;

use convert::{ConvertArgs, run_convert};
pub use error::CliError;

const ARG_CONVERT_VALUE: &str = "id";
const ARG_CONVERT_DIRECTION: &str = "direction";
const ARG_CONVERT_VALUE_ONLY: &str = "value-only";
const ENV_CONVERT_VALUE: &str = "STEAMID_CMDS_CONVERT_ID";

/// Run the steamid CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration layering, or
/// output writing fails. A malformed identifier is not an error: the
/// advisory line is ordinary output and the command still exits
/// successfully.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Convert(args) => run_convert(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "steamid",
    about = "Convert Steam identifiers between long and short decimal forms",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a single identifier and print the result line.
    Convert(ConvertArgs),
}

#[cfg(test)]
mod tests;
