#![warn(missing_docs)]

//! Entry point for the `propconv` binary.

mod cli;
mod commands;
mod error;

use std::process;

use clap::Parser;
use propconv::Registry;
use tracing::error;

use crate::{
    cli::{Cli, Commands},
    error::Result,
};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli { log, command } = Cli::parse();
    logging::init(&log);

    let registry = Registry::builtin();
    match command {
        Commands::Types => {
            commands::types(registry);
            Ok(())
        }
        Commands::Convert(args) => commands::convert(registry, &args),
        Commands::Apply(args) => commands::apply(&args),
    }
}
