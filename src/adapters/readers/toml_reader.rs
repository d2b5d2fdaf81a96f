//! TOML documents: each top-level table is a section.

use crate::domain::{AppError, ConfigDocument};
use crate::ports::ConfigReader;

#[derive(Debug, Clone, Copy, Default)]
pub struct TomlConfigReader;

impl ConfigReader for TomlConfigReader {
    fn parse(&self, content: &str) -> Result<ConfigDocument, AppError> {
        let table: toml::Table = content.parse()?;

        let mut document = ConfigDocument::new();
        for (name, value) in table {
            let toml::Value::Table(entries) = value else {
                tracing::debug!(key = %name, "ignoring top-level TOML value outside a table");
                continue;
            };
            let section = document.section_mut(&name);
            for (key, value) in entries {
                let text = render_value(&name, &key, value)?;
                section.set(key, text);
            }
        }
        Ok(document)
    }
}

fn render_value(section: &str, key: &str, value: toml::Value) -> Result<String, AppError> {
    let unsupported = |kind: &str| AppError::UnsupportedValue {
        section: section.to_string(),
        key: key.to_string(),
        kind: kind.to_string(),
    };

    match value {
        toml::Value::String(text) => Ok(text),
        toml::Value::Integer(number) => Ok(number.to_string()),
        toml::Value::Float(number) => Ok(number.to_string()),
        toml::Value::Boolean(flag) => Ok(flag.to_string()),
        toml::Value::Datetime(datetime) => Ok(datetime.to_string()),
        toml::Value::Array(_) => Err(unsupported("array")),
        toml::Value::Table(_) => Err(unsupported("table")),
    }
}
