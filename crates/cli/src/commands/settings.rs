//! Settings command: print what the binder extracted from the namespace.

use anyhow::Result;
use jsonbridge_plugin::SerializationConfigTranslator;

use crate::args::OutputFormat;
use crate::formatters::render;
use crate::startup::Environment;

pub fn run(env: &Environment, prefix: &str, output: OutputFormat) -> Result<()> {
    let bound = SerializationConfigTranslator::new(env.snapshot.clone())
        .with_prefix(prefix)
        .bind()?;
    if !bound.errors.is_empty() {
        tracing::warn!(errors = bound.errors.len(), "Some properties could not be bound");
    }
    println!("{}", render(output, &bound)?);
    Ok(())
}
