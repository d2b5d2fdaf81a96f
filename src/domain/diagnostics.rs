use serde::Serialize;

/// A non-fatal problem found while declaring arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Section or config key the warning is about.
    pub source: String,
    pub message: String,
}

/// Warnings accumulated during one build.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push_warning(&mut self, source: impl Into<String>, message: impl Into<String>) {
        let diagnostic = Diagnostic { source: source.into(), message: message.into() };
        tracing::warn!(source = %diagnostic.source, "{}", diagnostic.message);
        self.warnings.push(diagnostic);
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<Diagnostic> {
        self.warnings
    }
}
