//! Convert command implementation for the steamid CLI.

use std::io::Write;

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use steamid_core::{Direction, Effect, Request, Session};

use crate::{
    ARG_CONVERT_DIRECTION, ARG_CONVERT_VALUE, ARG_CONVERT_VALUE_ONLY, CliError, ENV_CONVERT_VALUE,
};

/// CLI arguments for the `convert` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Convert a Steam identifier between its long (SteamID64) \
                 and short (account id) decimal forms. The identifier can \
                 come from the command line, configuration files, or \
                 environment variables.",
    about = "Convert a Steam identifier between long and short forms"
)]
#[ortho_config(prefix = "STEAMID")]
pub(crate) struct ConvertArgs {
    /// Identifier to convert, as decimal text.
    #[arg(value_name = "id")]
    #[serde(default)]
    pub(crate) id: Option<String>,
    /// Conversion direction: `long-to-short` (default) or `short-to-long`.
    #[arg(long = ARG_CONVERT_DIRECTION, value_name = "direction")]
    #[serde(default)]
    pub(crate) direction: Option<Direction>,
    /// Print only the numeric value, as the copy action would export it.
    #[arg(long = ARG_CONVERT_VALUE_ONLY)]
    #[serde(default)]
    pub(crate) value_only: bool,
}

impl ConvertArgs {
    pub(crate) fn into_config(self) -> Result<ConvertConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ConvertConfig::try_from(merged)
    }
}

/// Resolved `convert` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConvertConfig {
    /// Identifier text, parsed by the session rather than the CLI.
    pub(crate) id: String,
    /// Conversion direction.
    pub(crate) direction: Direction,
    /// Print the copy payload instead of the labelled line.
    pub(crate) value_only: bool,
}

impl TryFrom<ConvertArgs> for ConvertConfig {
    type Error = CliError;

    fn try_from(args: ConvertArgs) -> Result<Self, Self::Error> {
        let id = args.id.ok_or(CliError::MissingArgument {
            field: ARG_CONVERT_VALUE,
            env: ENV_CONVERT_VALUE,
        })?;
        Ok(Self {
            id,
            direction: args.direction.unwrap_or_default(),
            value_only: args.value_only,
        })
    }
}

pub(crate) fn run_convert(args: ConvertArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_convert_with(args, &mut stdout)
}

pub(crate) fn run_convert_with(
    args: ConvertArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_convert(config, writer)
}

/// Drives a fresh session through one conversion and writes a single line.
pub(crate) fn execute_convert(
    config: ConvertConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut session = Session::new();
    session.apply(Request::SetDirection(config.direction));
    session.apply(Request::Input(config.id));
    session.apply(Request::Convert);
    let line = if config.value_only {
        match session.apply(Request::Copy) {
            Some(Effect::SetClipboard(payload)) => payload,
            None => String::new(),
        }
    } else {
        session.output().to_string()
    };
    writeln!(writer, "{line}").map_err(CliError::WriteOutput)
}
