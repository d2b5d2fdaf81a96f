use thiserror::Error;

/// Library-wide error type for configargs operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// An argline segment has no `=` between option name and value.
    #[error(
        "configargs options must be written as name=value but no '=' found in '{segment}' (all segments: {segments:?})"
    )]
    MalformedSegment { segment: String, segments: Vec<String> },

    /// A `type` name is neither built in nor handled by a resolver.
    #[error(
        "type={0} is not implemented; implement the conversion or supply a type resolver"
    )]
    UnsupportedType(String),

    /// The supplied type resolver rejected a type name.
    #[error("Type resolver failed for type={name}: {reason}")]
    TypeResolution { name: String, reason: String },

    /// A `default` element could not be converted with the declared type.
    #[error("Cannot convert default value '{value}' of '{argument}' to {type_name}: {reason}")]
    DefaultConversion { argument: String, value: String, type_name: String, reason: String },

    /// Stripping the positional marker left nothing to name the argument.
    #[error("Config key '{0}' does not leave a usable argument name")]
    EmptyArgumentName(String),

    /// INI syntax error reported by the reader.
    #[error(transparent)]
    IniParse(#[from] ini::ParseError),

    /// TOML syntax error reported by the reader.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A configuration value that cannot be read as an argline.
    #[error("Unsupported value for '{key}' in section '{section}': {kind} values cannot declare arguments")]
    UnsupportedValue { section: String, key: String, kind: String },

    /// The argument engine does not know this option.
    #[error("Unsupported option '{option}' for argument '{argument}'")]
    UnsupportedOption { argument: String, option: String },

    /// The argument engine cannot use the value given for an option.
    #[error("Invalid value for option '{option}' of argument '{argument}': {details}")]
    InvalidOptionValue { argument: String, option: String, details: String },

    /// An argument id was registered twice.
    #[error("Argument '{0}' is already declared")]
    DuplicateArgument(String),

    /// Command-line parsing failed in the argument engine.
    #[error(transparent)]
    ArgumentParse(#[from] clap::Error),

    /// Output rendering failed.
    #[error("Failed to render {what}: {details}")]
    Serialization { what: String, details: String },
}

impl AppError {
    pub fn invalid_option<A, O, D>(argument: A, option: O, details: D) -> Self
    where
        A: Into<String>,
        O: Into<String>,
        D: Into<String>,
    {
        AppError::InvalidOptionValue {
            argument: argument.into(),
            option: option.into(),
            details: details.into(),
        }
    }
}
