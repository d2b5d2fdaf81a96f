//! Declare the arguments of one configuration section with an argument engine.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{
    AppError, ArgumentIdentifier, ConfigDocument, Diagnostic, Diagnostics, OptionMapping,
    build_option_mapping, split_line,
};
use crate::ports::{ArgumentEngine, ConfigReader};

/// One registered declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclaredArgument {
    /// Configuration key the declaration came from.
    pub key: String,
    pub identifier: ArgumentIdentifier,
    pub options: OptionMapping,
}

/// Result of declaring a section.
#[derive(Debug)]
pub struct DeclareOutcome {
    pub document: ConfigDocument,
    pub arguments: Vec<DeclaredArgument>,
    pub warnings: Vec<Diagnostic>,
}

/// Load the document at `path` and register every entry of the designated section.
pub fn execute<R: ConfigReader, E: ArgumentEngine>(
    ctx: &AppContext<R>,
    path: &Path,
    engine: &mut E,
) -> Result<DeclareOutcome, AppError> {
    let document = load_document(ctx.reader(), path)?;
    let mut diagnostics = Diagnostics::default();
    let arguments = declare_section(ctx, &document, engine, &mut diagnostics)?;

    Ok(DeclareOutcome { document, arguments, warnings: diagnostics.into_warnings() })
}

/// Read and parse a configuration file.
///
/// A file that cannot be read yields an empty document. Syntax errors are returned.
pub fn load_document<R: ConfigReader>(reader: &R, path: &Path) -> Result<ConfigDocument, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => reader.parse(&content),
        Err(err) => {
            tracing::debug!(
                path = %path.display(),
                error = %err,
                "config not readable, using empty document"
            );
            Ok(ConfigDocument::new())
        }
    }
}

/// Register every entry of the designated section, in file order.
pub fn declare_section<R: ConfigReader, E: ArgumentEngine>(
    ctx: &AppContext<R>,
    document: &ConfigDocument,
    engine: &mut E,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<DeclaredArgument>, AppError> {
    let settings = ctx.settings();
    let Some(section) = document.section(&settings.section) else {
        diagnostics.push_warning(
            &settings.section,
            format!("section '{}' not found in config, skipping", settings.section),
        );
        return Ok(Vec::new());
    };

    let mut arguments = Vec::with_capacity(section.len());
    for (key, argline) in section.iter() {
        let identifier = ArgumentIdentifier::derive(key, &settings.positional_marker)?;
        let segments = split_line(argline, settings.separator)?;
        let options = build_option_mapping(key, segments, ctx.resolver(), diagnostics)?;

        engine.add_argument(&identifier, &options)?;
        tracing::debug!(key, argument = %identifier, "declared argument");
        arguments.push(DeclaredArgument { key: key.to_string(), identifier, options });
    }
    Ok(arguments)
}
