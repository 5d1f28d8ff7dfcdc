//! Command implementations, one module per subcommand.

pub mod properties;
pub mod settings;
pub mod show;
