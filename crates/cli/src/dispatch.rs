//! Command dispatch logic for the CLI.
//!
//! Responsibilities:
//! - Route parsed CLI commands to their implementations.
//!
//! Does NOT handle:
//! - Argument parsing (see `args` module).
//! - Exit code mapping (see `error` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

pub fn run_command(cli: Cli) -> Result<()> {
    let options = cli.loader_options()?;

    match cli.command {
        Commands::Load {
            default,
            default_file,
        } => commands::load::run(options, default.as_deref(), default_file.as_deref()),
        Commands::Check => commands::check::run(options),
    }
}
