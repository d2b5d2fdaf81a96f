pub mod argline;
pub mod coercion;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod identifier;
mod option_mapping;
pub mod value;

pub use argline::{DEFAULT_SEPARATOR, OptionSegment, split_line};
pub use coercion::{build_option_mapping, coerce_option, resolve_type};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use document::{ConfigDocument, Section};
pub use error::AppError;
pub use identifier::ArgumentIdentifier;
pub use option_mapping::OptionMapping;
pub use value::{ConvertFn, OptionValue, Scalar, TypeResolver, ValueType};

/// Default name of the section holding argument declarations.
pub const DEFAULT_SECTION: &str = "ARGPARSE";

/// Default prefix marking a key as a positional argument.
pub const DEFAULT_POSITIONAL_MARKER: &str = "__";
