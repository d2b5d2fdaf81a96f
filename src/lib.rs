//! configargs: declare command-line arguments in a configuration file section.
//!
//! Each entry of the designated section (default `ARGPARSE`) declares one
//! argument. The key names it: one-character keys and keys starting with the
//! positional marker (default `__`) become positionals, all others become
//! `--key` flags. The value lists `option=value` pairs separated by a
//! backslash:
//!
//! ```ini
//! [ARGPARSE]
//! __input=type=str\help=input file
//! verbose=action=store_true
//! sizes=type=int\nargs=+\default=[1,2,3]
//! ```
//!
//! ```no_run
//! use configargs::ConfigArgParser;
//!
//! let parser = ConfigArgParser::builder("app.ini")
//!     .command(clap::Command::new("app"))
//!     .build()?;
//! let values = parser.try_parse_from(["app", "data.csv", "--verbose"])?;
//! assert_eq!(values.get("verbose"), Some(&serde_json::Value::Bool(true)));
//! # Ok::<(), configargs::AppError>(())
//! ```

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{ClapEngine, ConfigFormat, IniOptions, ParsedArguments};
pub use app::api::{ConfigArgParser, ConfigArgParserBuilder};
pub use app::commands::declare::DeclaredArgument;
pub use app::config::BuilderSettings;
pub use domain::{
    AppError, ArgumentIdentifier, ConfigDocument, Diagnostic, OptionMapping, OptionValue, Scalar,
    ValueType,
};
