//! Error types emitted by the steamid CLI.

use std::sync::Arc;

use thiserror::Error;

/// Errors emitted by the steamid CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Writing the conversion output failed.
    #[error("failed to write conversion output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
