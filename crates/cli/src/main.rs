//! jsonbridge CLI - inspect how configuration properties shape the JSON codec.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Start the host: load the namespace, capture it, run plugin pre-init.
//! - Print codec summaries, bound settings and raw properties.
//!
//! Does NOT handle:
//! - Property binding or codec translation (see `crates/plugin`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod startup;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use jsonbridge_config::NamespaceLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = NamespaceLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
