use crate::domain::{AppError, ConfigDocument};
use crate::ports::ConfigReader;

/// Reader returning a prepared document regardless of file content.
#[derive(Default)]
#[allow(dead_code)]
pub struct MemoryReader {
    pub document: ConfigDocument,
}

#[allow(dead_code)]
impl MemoryReader {
    pub fn with_section(name: &str, entries: &[(&str, &str)]) -> Self {
        let mut document = ConfigDocument::new();
        let section = document.section_mut(name);
        for (key, value) in entries {
            section.set(*key, *value);
        }
        Self { document }
    }
}

impl ConfigReader for MemoryReader {
    fn parse(&self, _content: &str) -> Result<ConfigDocument, AppError> {
        Ok(self.document.clone())
    }
}
