mod ini_reader;
mod toml_reader;

use std::path::Path;

use serde::Deserialize;

pub use ini_reader::{IniConfigReader, IniOptions};
pub use toml_reader::TomlConfigReader;

/// Syntax of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Ini,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are TOML, everything else is read as INI.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Ini,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("app.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("app.TOML")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("app.ini")), ConfigFormat::Ini);
        assert_eq!(ConfigFormat::from_path(Path::new("setup.cfg")), ConfigFormat::Ini);
        assert_eq!(ConfigFormat::from_path(Path::new("noext")), ConfigFormat::Ini);
    }
}
