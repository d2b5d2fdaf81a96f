use crate::domain::{AppError, ConfigDocument};

/// Port for turning configuration file text into a [`ConfigDocument`].
///
/// Implementations must keep keys case-sensitive and preserve file order.
pub trait ConfigReader {
    /// Parse document text. Syntax errors are returned unchanged.
    fn parse(&self, content: &str) -> Result<ConfigDocument, AppError>;
}
