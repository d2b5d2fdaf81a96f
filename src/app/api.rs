//! API facade for the library.
//!
//! Glues a configuration reader, the builder settings and the clap engine
//! together behind [`ConfigArgParser`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Command;

use crate::adapters::{
    ClapEngine, ConfigFormat, IniConfigReader, IniOptions, ParsedArguments, TomlConfigReader,
};
use crate::app::AppContext;
use crate::app::commands::declare::{self, DeclareOutcome, DeclaredArgument};
use crate::app::config::BuilderSettings;
use crate::domain::{AppError, ConfigDocument, Diagnostic, TypeResolver, ValueType};
use crate::ports::ConfigReader;

/// A clap command whose arguments were declared in a configuration file.
#[derive(Debug)]
pub struct ConfigArgParser {
    engine: ClapEngine,
    document: ConfigDocument,
    arguments: Vec<DeclaredArgument>,
    warnings: Vec<Diagnostic>,
}

impl ConfigArgParser {
    /// Start configuring a parser for the file at `path`.
    pub fn builder(path: impl Into<PathBuf>) -> ConfigArgParserBuilder {
        ConfigArgParserBuilder::new(path)
    }

    /// Build a parser for `path` with default settings.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        Self::builder(path).build()
    }

    pub fn command(&self) -> &Command {
        self.engine.command()
    }

    pub fn into_command(self) -> Command {
        self.engine.into_command()
    }

    /// Declarations in registration order.
    pub fn arguments(&self) -> &[DeclaredArgument] {
        &self.arguments
    }

    /// The whole loaded configuration, including sections other than the declarations.
    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// Non-fatal problems found while building.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Parse a command line; the first item is the program name.
    pub fn try_parse_from<I, T>(&self, argv: I) -> Result<ParsedArguments, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.engine.try_parse_from(argv)
    }
}

/// Settings collected before a [`ConfigArgParser`] is built.
pub struct ConfigArgParserBuilder {
    path: PathBuf,
    settings: BuilderSettings,
    format: Option<ConfigFormat>,
    resolver: Option<Arc<TypeResolver>>,
    command: Command,
}

impl ConfigArgParserBuilder {
    fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            settings: BuilderSettings::default(),
            format: None,
            resolver: None,
            command: Command::new(env!("CARGO_PKG_NAME")),
        }
    }

    /// Section holding the declarations.
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.settings.section = section.into();
        self
    }

    /// Key prefix marking positional arguments.
    pub fn positional_marker(mut self, marker: impl Into<String>) -> Self {
        self.settings.positional_marker = marker.into();
        self
    }

    /// Separator between `name=value` segments of one line.
    pub fn separator(mut self, separator: char) -> Self {
        self.settings.separator = separator;
        self
    }

    /// Replace all settings at once.
    pub fn settings(mut self, settings: BuilderSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn ini_options(mut self, options: IniOptions) -> Self {
        self.settings.ini = options;
        self
    }

    /// Force a syntax instead of detecting it from the file extension.
    pub fn format(mut self, format: ConfigFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Resolve `type=` names that are not built in.
    pub fn type_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&str) -> Result<ValueType, String> + Send + Sync + 'static,
    {
        let resolver: Arc<TypeResolver> = Arc::new(resolver);
        self.resolver = Some(resolver);
        self
    }

    /// Base command the declared arguments are added to.
    pub fn command(mut self, command: Command) -> Self {
        self.command = command;
        self
    }

    /// Load the file and declare its arguments.
    pub fn build(self) -> Result<ConfigArgParser, AppError> {
        let format = self.format.unwrap_or_else(|| ConfigFormat::from_path(&self.path));
        let mut engine = ClapEngine::new(self.command);

        let outcome = match format {
            ConfigFormat::Ini => declare_with(
                IniConfigReader::new(self.settings.ini),
                self.settings,
                self.resolver,
                &self.path,
                &mut engine,
            )?,
            ConfigFormat::Toml => declare_with(
                TomlConfigReader,
                self.settings,
                self.resolver,
                &self.path,
                &mut engine,
            )?,
        };

        Ok(ConfigArgParser {
            engine,
            document: outcome.document,
            arguments: outcome.arguments,
            warnings: outcome.warnings,
        })
    }
}

fn declare_with<R: ConfigReader>(
    reader: R,
    settings: BuilderSettings,
    resolver: Option<Arc<TypeResolver>>,
    path: &Path,
    engine: &mut ClapEngine,
) -> Result<DeclareOutcome, AppError> {
    let ctx = AppContext::new(reader, settings).with_resolver(resolver);
    declare::execute(&ctx, path, engine)
}
