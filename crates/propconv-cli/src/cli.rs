//! Command-line interface definitions for the `propconv` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;

/// Command-line interface for the `propconv` binary.
#[derive(Parser, Debug)]
#[command(
    name = "propconv",
    about = "Convert JSON values into typed values and apply them as properties",
    version
)]
pub struct Cli {
    /// Logging controls.
    #[command(flatten)]
    pub log: LogArgs,

    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every type name the built-in registry can convert to.
    Types,
    /// Convert a JSON value to a registered type and print the result.
    Convert(ConvertArgs),
    /// Apply a JSON object of `path: value` pairs to a default view.
    Apply(ApplyArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Registered type name, e.g. `Color` or `FlexDirection`.
    #[arg(value_name = "TYPE")]
    pub type_name: String,

    /// JSON input; read from stdin when omitted.
    #[arg(value_name = "JSON")]
    pub json: Option<String>,

    /// Convert a sequence of TYPE instead of a single value.
    #[arg(long)]
    pub array: bool,

    /// Print the result as JSON instead of its debug form.
    #[arg(long = "json")]
    pub json_output: bool,
}

/// Arguments for the `apply` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ApplyArgs {
    /// File holding the JSON object; read from stdin when omitted.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Exit with an error when any path was not assigned.
    #[arg(long)]
    pub strict: bool,
}
