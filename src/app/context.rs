use std::sync::Arc;

use crate::app::config::BuilderSettings;
use crate::domain::TypeResolver;
use crate::ports::ConfigReader;

/// Application context holding dependencies for declaring arguments.
pub struct AppContext<R: ConfigReader> {
    reader: R,
    settings: BuilderSettings,
    resolver: Option<Arc<TypeResolver>>,
}

impl<R: ConfigReader> AppContext<R> {
    /// Create a new application context.
    pub fn new(reader: R, settings: BuilderSettings) -> Self {
        Self { reader, settings, resolver: None }
    }

    /// Attach a resolver for `type=` names outside the built-in table.
    pub fn with_resolver(mut self, resolver: Option<Arc<TypeResolver>>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Get a reference to the configuration reader.
    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn settings(&self) -> &BuilderSettings {
        &self.settings
    }

    pub fn resolver(&self) -> Option<&TypeResolver> {
        self.resolver.as_deref()
    }
}
