//! Show command: run plugin pre-init and print the configured JSON codec.

use std::sync::Arc;

use anyhow::{Context, Result};
use jsonbridge_plugin::{
    EngineConfiguration, JSON_DATA_FORMAT, JsonDataFormat, JsonFormatPlugin,
    SerializationConfigTranslator,
};
use serde::Serialize;

use crate::args::OutputFormat;
use crate::formatters::render;
use crate::startup::Environment;

#[derive(Serialize)]
struct ShowOutput<'a, S: Serialize> {
    data_formats: Vec<&'a str>,
    codec: S,
}

pub fn run(env: &Environment, prefix: &str, output: OutputFormat) -> Result<()> {
    let translator = SerializationConfigTranslator::new(env.snapshot.clone()).with_prefix(prefix);
    let mut engine = EngineConfiguration::new()
        .with_plugin(Arc::new(JsonFormatPlugin::with_translator(translator)));
    engine.run_pre_init()?;

    let json = engine
        .data_formats()
        .get_as::<JsonDataFormat>(JSON_DATA_FORMAT)
        .context("JSON data format was not discovered during pre-init")?;

    let report = ShowOutput {
        data_formats: engine.data_formats().names(),
        codec: json.codec().config().summary(),
    };
    println!("{}", render(output, &report)?);
    Ok(())
}
