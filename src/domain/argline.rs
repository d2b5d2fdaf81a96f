//! Splitting of raw arglines into `name=value` option segments.

use super::AppError;

/// Default separator between option segments.
pub const DEFAULT_SEPARATOR: char = '\\';

/// One `name=value` pair taken from an argline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSegment {
    pub name: String,
    pub value: String,
}

/// Split an argline into option segments, in line order.
///
/// Each segment is trimmed and split at its first `=`, so values may contain
/// further `=` characters.
pub fn split_line(argline: &str, separator: char) -> Result<Vec<OptionSegment>, AppError> {
    let segments: Vec<&str> = argline.split(separator).collect();

    segments
        .iter()
        .map(|raw| {
            let segment = raw.trim();
            let Some((name, value)) = segment.split_once('=') else {
                return Err(AppError::MalformedSegment {
                    segment: segment.to_string(),
                    segments: segments.iter().map(|s| s.to_string()).collect(),
                });
            };
            Ok(OptionSegment { name: name.to_string(), value: value.to_string() })
        })
        .collect()
}
