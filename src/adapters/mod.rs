pub mod clap_engine;
pub mod readers;

pub use clap_engine::{ClapEngine, ParsedArguments};
pub use readers::{ConfigFormat, IniConfigReader, IniOptions, TomlConfigReader};
