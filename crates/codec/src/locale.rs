//! Codec locale (`language[_COUNTRY[_variant]]`).

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    country: Option<String>,
    variant: Option<String>,
}

impl Locale {
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// BCP 47 style tag, e.g. `en-US`.
    pub fn to_language_tag(&self) -> String {
        let mut tag = self.language.clone();
        for part in [&self.country, &self.variant].into_iter().flatten() {
            tag.push('-');
            tag.push_str(part);
        }
        tag
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        match (&self.country, &self.variant) {
            (Some(country), Some(variant)) => write!(f, "_{country}_{variant}"),
            (Some(country), None) => write!(f, "_{country}"),
            (None, Some(variant)) => write!(f, "__{variant}"),
            (None, None) => Ok(()),
        }
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Locale {
    type Err = CodecError;

    /// Accepts `_` or `-` separators: `en`, `en_US`, `en-us`, `de_DE_POSIX`, `es_419`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CodecError::invalid(s, "locale");
        let mut parts = s.trim().split(['_', '-']);

        let language = parts.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let country = match parts.next() {
            None | Some("") => None,
            Some(c) if is_country(c) => Some(c.to_ascii_uppercase()),
            Some(_) => return Err(invalid()),
        };

        let rest: Vec<&str> = parts.collect();
        let variant = if rest.is_empty() {
            None
        } else if rest
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_alphanumeric()))
        {
            Some(rest.join("_"))
        } else {
            return Err(invalid());
        };

        Ok(Self {
            language: language.to_ascii_lowercase(),
            country,
            variant,
        })
    }
}

fn is_country(raw: &str) -> bool {
    (raw.len() == 2 && raw.chars().all(|c| c.is_ascii_alphabetic()))
        || (raw.len() == 3 && raw.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_and_country() {
        let locale: Locale = "en-us".parse().unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.country(), Some("US"));
        assert_eq!(locale.to_string(), "en_US");
        assert_eq!(locale.to_language_tag(), "en-US");
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("DE".parse::<Locale>().unwrap().to_string(), "de");
        assert_eq!("es_419".parse::<Locale>().unwrap().country(), Some("419"));
        let posix: Locale = "de_DE_POSIX".parse().unwrap();
        assert_eq!(posix.variant(), Some("POSIX"));
        assert_eq!("ja__JP".parse::<Locale>().unwrap().to_string(), "ja__JP");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for raw in ["", "e", "english", "en_USA", "12", "en_U$", "en_US_"] {
            assert!(raw.parse::<Locale>().is_err(), "{raw}");
        }
    }
}
