//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load the configuration namespace (see `startup` module).

use clap::{Parser, Subcommand, ValueEnum};
use jsonbridge_config::DEFAULT_PREFIX;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jsonbridge")]
#[command(about = "jsonbridge - Inspect how configuration properties shape the JSON codec", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  jsonbridge show\n  jsonbridge --set codec.json.serialization.indent-output=true show\n  jsonbridge --config-path ./application.yaml settings\n  CODEC_JSON_TIME_ZONE=+02:00 jsonbridge properties\n  jsonbridge --prefix spring.jackson -o yaml show\n"
)]
pub struct Cli {
    /// Path to a JSON or YAML configuration file (overrides default location).
    ///
    /// Can also be set via JSONBRIDGE_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "JSONBRIDGE_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Property override with the highest precedence (repeatable)
    #[arg(long = "set", global = true, value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Key prefix the serialization properties live under
    #[arg(long, global = true, env = "JSONBRIDGE_PREFIX", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run plugin pre-init and print the configured JSON codec
    Show,

    /// Print the settings bound from the namespace, with binding errors
    Settings,

    /// List the raw properties under the prefix and where each came from
    Properties,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}
