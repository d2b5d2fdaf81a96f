use crate::domain::{AppError, ArgumentIdentifier, OptionMapping};
use crate::ports::ArgumentEngine;

/// Argument engine that records registrations for assertions.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingEngine {
    pub registered: Vec<(ArgumentIdentifier, OptionMapping)>,
    pub reject: Option<String>,
}

#[allow(dead_code)]
impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail when an argument with this name is registered.
    pub fn rejecting(name: &str) -> Self {
        Self { registered: Vec::new(), reject: Some(name.to_string()) }
    }

    pub fn names(&self) -> Vec<String> {
        self.registered.iter().map(|(identifier, _)| identifier.to_string()).collect()
    }
}

impl ArgumentEngine for RecordingEngine {
    fn add_argument(
        &mut self,
        identifier: &ArgumentIdentifier,
        options: &OptionMapping,
    ) -> Result<(), AppError> {
        if self.reject.as_deref() == Some(identifier.name()) {
            return Err(AppError::DuplicateArgument(identifier.name().to_string()));
        }
        self.registered.push((identifier.clone(), options.clone()));
        Ok(())
    }
}
