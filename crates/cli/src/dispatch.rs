//! Command dispatch logic.
//!
//! Responsibilities:
//! - Capture the environment once, then route to the subcommand handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping (see `error` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::startup;

pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let env = startup::prepare(&cli)?;
    match cli.command {
        Commands::Show => commands::show::run(&env, &cli.prefix, cli.output),
        Commands::Settings => commands::settings::run(&env, &cli.prefix, cli.output),
        Commands::Properties => commands::properties::run(&env, &cli.prefix, cli.output),
    }
}
