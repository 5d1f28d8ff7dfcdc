//! Properties command: list raw properties under the prefix with their source.

use anyhow::Result;
use jsonbridge_config::PropertyValue;
use serde::Serialize;

use crate::args::OutputFormat;
use crate::formatters::render;
use crate::startup::Environment;

#[derive(Serialize)]
struct PropertyRow<'a> {
    key: &'a str,
    value: &'a PropertyValue,
    source: &'a str,
}

pub fn run(env: &Environment, prefix: &str, output: OutputFormat) -> Result<()> {
    let rows: Vec<PropertyRow<'_>> = env
        .namespace
        .entries_under(prefix)
        .into_iter()
        .map(|p| PropertyRow {
            key: p.key,
            value: p.value,
            source: p.source,
        })
        .collect();
    println!("{}", render(output, &rows)?);
    Ok(())
}
