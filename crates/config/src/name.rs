//! Relaxed property-name matching.
//!
//! Responsibilities:
//! - Reduce names to a canonical form so `date-format`, `dateFormat`,
//!   `DATE_FORMAT` and `date.format` compare equal.
//! - Translate environment variable names into dotted keys.
//! - Split dotted keys into segments, honouring `[...]` subscripts.
//!
//! Does NOT handle:
//! - Value coercion (see the settings binder in `jsonbridge-plugin`).
//! - Precedence between sources (see `namespace.rs`).
//!
//! Invariants:
//! - `canonical` is idempotent and ignores every non-alphanumeric character.
//! - Bracketed subscripts are kept verbatim as a single segment, dots included.

/// Canonical form of a name: alphanumerics only, lowercased.
pub fn canonical(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns true when two names are equal under relaxed matching.
pub fn relaxed_eq(a: &str, b: &str) -> bool {
    canonical(a) == canonical(b)
}

/// Convert an environment variable name into a dotted property key.
///
/// `CODEC_JSON_DATE_FORMAT` becomes `codec.json.date.format`. Runs of
/// underscores collapse into a single separator.
pub fn env_var_to_key(name: &str) -> String {
    name.trim()
        .split('_')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".")
}

/// Split a dotted key into its segments.
///
/// `codec.json.serialization[INDENT_OUTPUT]` yields
/// `["codec", "json", "serialization", "INDENT_OUTPUT"]`.
pub fn segments(key: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut chars = key.chars();

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
            }
            '[' => {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
                let subscript: String = chars.by_ref().take_while(|&c| c != ']').collect();
                if !subscript.is_empty() {
                    out.push(subscript);
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Strip `prefix` from `key`, comparing segment by segment under relaxed rules.
///
/// Returns the remaining segments, or `None` if the key is not under the prefix.
/// A key equal to the prefix itself yields an empty remainder.
pub fn strip_prefix(key: &str, prefix: &str) -> Option<Vec<String>> {
    let key_segments = segments(key);
    let prefix_segments = segments(prefix);

    if key_segments.len() < prefix_segments.len() {
        return None;
    }
    let matches = key_segments
        .iter()
        .zip(&prefix_segments)
        .all(|(k, p)| relaxed_eq(k, p));

    matches.then(|| key_segments[prefix_segments.len()..].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_collapses_separators_and_case() {
        for variant in [
            "date-format",
            "dateFormat",
            "DATE_FORMAT",
            "date.format",
            "Date_Format",
        ] {
            assert_eq!(canonical(variant), "dateformat", "variant {variant}");
        }
    }

    #[test]
    fn test_env_var_to_key() {
        assert_eq!(
            env_var_to_key("CODEC_JSON_SERIALIZATION_INDENT_OUTPUT"),
            "codec.json.serialization.indent.output"
        );
        assert_eq!(env_var_to_key("CODEC__JSON_LOCALE"), "codec.json.locale");
    }

    #[test]
    fn test_segments_with_subscripts() {
        assert_eq!(
            segments("codec.json.serialization[INDENT_OUTPUT]"),
            vec!["codec", "json", "serialization", "INDENT_OUTPUT"]
        );
        assert_eq!(segments("a.b[c.d].e"), vec!["a", "b", "c.d", "e"]);
        assert_eq!(segments("list[0]"), vec!["list", "0"]);
    }

    #[test]
    fn test_strip_prefix_is_relaxed() {
        assert_eq!(
            strip_prefix("Codec.JSON.date-format", "codec.json"),
            Some(vec!["date-format".to_string()])
        );
        assert_eq!(strip_prefix("codec.xml.locale", "codec.json"), None);
        assert_eq!(strip_prefix("codec", "codec.json"), None);
        assert_eq!(strip_prefix("codec.json", "codec.json"), Some(vec![]));
    }
}
