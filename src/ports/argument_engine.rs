use crate::domain::{AppError, ArgumentIdentifier, OptionMapping};

/// Port for the argument parser that receives declarations.
pub trait ArgumentEngine {
    /// Register one argument with its coerced options.
    fn add_argument(
        &mut self,
        identifier: &ArgumentIdentifier,
        options: &OptionMapping,
    ) -> Result<(), AppError>;
}
