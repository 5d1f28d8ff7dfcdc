//! Output formatters for CLI commands.
//!
//! Provides JSON and YAML renderings of any serializable report.

use anyhow::Result;
use serde::Serialize;

use crate::args::OutputFormat;

/// Render `value` in the requested format.
pub(crate) fn render<T: Serialize + ?Sized>(format: OutputFormat, value: &T) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample() -> BTreeMap<&'static str, &'static str> {
        BTreeMap::from([("inclusion", "NON_NULL")])
    }

    #[test]
    fn test_render_json() {
        let out = render(OutputFormat::Json, &sample()).unwrap();
        assert_eq!(out, "{\n  \"inclusion\": \"NON_NULL\"\n}");
    }

    #[test]
    fn test_render_yaml() {
        let out = render(OutputFormat::Yaml, &sample()).unwrap();
        assert_eq!(out, "inclusion: NON_NULL\n");
    }
}
