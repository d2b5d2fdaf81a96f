//! Builder settings.

use serde::Deserialize;

use crate::adapters::IniOptions;
use crate::domain::{DEFAULT_POSITIONAL_MARKER, DEFAULT_SECTION, DEFAULT_SEPARATOR};

/// Where declarations live and how their keys and lines are read.
///
/// Deserializable so host programs can keep these settings in their own
/// configuration; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderSettings {
    /// Section holding one entry per argument.
    pub section: String,
    /// Key prefix marking a positional argument.
    pub positional_marker: String,
    /// Separator between `name=value` segments.
    pub separator: char,
    /// Pass-through options for the INI reader.
    pub ini: IniOptions,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            section: DEFAULT_SECTION.to_string(),
            positional_marker: DEFAULT_POSITIONAL_MARKER.to_string(),
            separator: DEFAULT_SEPARATOR,
            ini: IniOptions::default(),
        }
    }
}
