//! Argument identifiers derived from configuration keys.

use std::fmt;

use serde::Serialize;

use super::AppError;

/// Name under which a configuration entry is registered with the argument engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum ArgumentIdentifier {
    /// Identified by position on the command line.
    Positional(String),
    /// Identified by a `--name` flag.
    Flag(String),
}

impl ArgumentIdentifier {
    /// Derive the identifier for a configuration key.
    ///
    /// A one-character key, or a key starting with `marker`, is positional and
    /// loses exactly one leading occurrence of the marker. Every other key
    /// becomes a `--key` flag. An empty marker matches no key.
    pub fn derive(key: &str, marker: &str) -> Result<Self, AppError> {
        if key.chars().count() == 1 {
            return Ok(ArgumentIdentifier::Positional(key.to_string()));
        }

        let marked = if marker.is_empty() { None } else { key.strip_prefix(marker) };

        if let Some(name) = marked {
            if name.is_empty() {
                return Err(AppError::EmptyArgumentName(key.to_string()));
            }
            return Ok(ArgumentIdentifier::Positional(name.to_string()));
        }

        if key.is_empty() {
            return Err(AppError::EmptyArgumentName(key.to_string()));
        }

        Ok(ArgumentIdentifier::Flag(key.to_string()))
    }

    /// The bare name, without any `--` prefix.
    pub fn name(&self) -> &str {
        match self {
            ArgumentIdentifier::Positional(name) | ArgumentIdentifier::Flag(name) => name,
        }
    }

    pub fn is_positional(&self) -> bool {
        matches!(self, ArgumentIdentifier::Positional(_))
    }
}

impl fmt::Display for ArgumentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentIdentifier::Positional(name) => write!(f, "{}", name),
            ArgumentIdentifier::Flag(name) => write!(f, "--{}", name),
        }
    }
}
