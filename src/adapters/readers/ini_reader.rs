//! INI documents through rust-ini.

use ini::{Ini, ParseOption};
use serde::Deserialize;

use crate::domain::{AppError, ConfigDocument};
use crate::ports::ConfigReader;

/// Pass-through parse options for the INI reader.
///
/// Escapes stay off by default: the argline separator is a backslash and must
/// reach the line splitter untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IniOptions {
    /// Strip surrounding quotes from values.
    pub enable_quote: bool,
    /// Interpret backslash escapes in values.
    pub enable_escape: bool,
}

#[derive(Debug, Clone, Default)]
pub struct IniConfigReader {
    options: IniOptions,
}

impl IniConfigReader {
    pub fn new(options: IniOptions) -> Self {
        Self { options }
    }
}

impl ConfigReader for IniConfigReader {
    fn parse(&self, content: &str) -> Result<ConfigDocument, AppError> {
        let option = ParseOption {
            enabled_quote: self.options.enable_quote,
            enabled_escape: self.options.enable_escape,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(content, option)?;

        let mut document = ConfigDocument::new();
        for (name, properties) in ini.iter() {
            // Entries before the first header belong to no section.
            let Some(name) = name else {
                continue;
            };
            let section = document.section_mut(name);
            for (key, value) in properties.iter() {
                section.set(key, value);
            }
        }
        Ok(document)
    }
}
