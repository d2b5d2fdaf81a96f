//! Option value coercion for one argline.
//!
//! Options are coerced in a single left-to-right pass. Each option sees only
//! the options before it on the same line, which is why `type` has to come
//! before `default` for the defaults to be typed.

use super::argline::OptionSegment;
use super::{AppError, Diagnostics, OptionMapping, OptionValue, Scalar, TypeResolver, ValueType};

/// Coerce every segment of one argline into an option mapping.
pub fn build_option_mapping(
    argument: &str,
    segments: Vec<OptionSegment>,
    resolver: Option<&TypeResolver>,
    diagnostics: &mut Diagnostics,
) -> Result<OptionMapping, AppError> {
    segments.into_iter().try_fold(OptionMapping::new(), |mut mapping, segment| {
        let value = coerce_option(
            argument,
            &segment.name,
            &segment.value,
            &mapping,
            resolver,
            diagnostics,
        )?;
        mapping.insert(segment.name, value);
        Ok(mapping)
    })
}

/// Coerce a single option given the options already coerced on its line.
pub fn coerce_option(
    argument: &str,
    name: &str,
    raw: &str,
    preceding: &OptionMapping,
    resolver: Option<&TypeResolver>,
    diagnostics: &mut Diagnostics,
) -> Result<OptionValue, AppError> {
    match name {
        "nargs" => Ok(raw
            .parse::<i64>()
            .map(OptionValue::Int)
            .unwrap_or_else(|_| OptionValue::Text(raw.to_string()))),
        "default" => coerce_default(argument, raw, preceding, diagnostics),
        "type" => resolve_type(raw, resolver).map(OptionValue::Type),
        _ => Ok(OptionValue::Text(raw.to_string())),
    }
}

fn coerce_default(
    argument: &str,
    raw: &str,
    preceding: &OptionMapping,
    diagnostics: &mut Diagnostics,
) -> Result<OptionValue, AppError> {
    let inner = raw.strip_prefix('[').unwrap_or(raw);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    let items = inner.split(',');

    let Some(value_type) = preceding.get("type").and_then(OptionValue::as_type) else {
        diagnostics.push_warning(
            argument,
            format!(
                "could not convert default '{}' of '{}': no type defined before default, keeping strings",
                raw, argument
            ),
        );
        return Ok(OptionValue::List(items.map(|item| Scalar::Str(item.to_string())).collect()));
    };

    items
        .map(|item| {
            value_type.convert(item).map_err(|reason| AppError::DefaultConversion {
                argument: argument.to_string(),
                value: item.to_string(),
                type_name: value_type.name().to_string(),
                reason,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(OptionValue::List)
}

/// Resolve a `type=` name through the built-in table, then the resolver.
pub fn resolve_type(name: &str, resolver: Option<&TypeResolver>) -> Result<ValueType, AppError> {
    if let Some(value_type) = ValueType::builtin(name) {
        return Ok(value_type);
    }

    match resolver {
        Some(resolve) => resolve(name)
            .map_err(|reason| AppError::TypeResolution { name: name.to_string(), reason }),
        None => Err(AppError::UnsupportedType(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::argline::{DEFAULT_SEPARATOR, split_line};

    fn mapping_for(line: &str) -> (Result<OptionMapping, AppError>, Diagnostics) {
        let mut diagnostics = Diagnostics::default();
        let segments = split_line(line, DEFAULT_SEPARATOR).unwrap();
        let result = build_option_mapping("arg", segments, None, &mut diagnostics);
        (result, diagnostics)
    }

    #[test]
    fn nargs_integer() {
        let (mapping, _) = mapping_for("nargs=3");
        assert_eq!(mapping.unwrap().get("nargs"), Some(&OptionValue::Int(3)));
    }

    #[test]
    fn nargs_sentinel_passes_through() {
        let (mapping, _) = mapping_for("nargs=+");
        assert_eq!(mapping.unwrap().get("nargs"), Some(&OptionValue::Text("+".into())));
    }

    #[test]
    fn type_int_resolves_to_builtin() {
        let (mapping, _) = mapping_for("type=int");
        let mapping = mapping.unwrap();
        let value_type = mapping.get("type").and_then(OptionValue::as_type).unwrap();
        assert_eq!(value_type.name(), "int");
        assert_eq!(value_type.convert("7"), Ok(Scalar::Int(7)));
    }

    #[test]
    fn default_after_type_is_typed() {
        let (mapping, diagnostics) = mapping_for("type=int\\default=[1,2,3]");
        assert_eq!(
            mapping.unwrap().get("default"),
            Some(&OptionValue::List(vec![Scalar::Int(1), Scalar::Int(2), Scalar::Int(3)]))
        );
        assert!(!diagnostics.has_warnings());
    }

    #[test]
    fn default_before_type_stays_strings_with_warning() {
        let (mapping, diagnostics) = mapping_for("default=[1,2,3]\\type=int");
        let mapping = mapping.unwrap();
        assert_eq!(
            mapping.get("default"),
            Some(&OptionValue::List(vec![
                Scalar::Str("1".into()),
                Scalar::Str("2".into()),
                Scalar::Str("3".into()),
            ]))
        );
        assert!(mapping.get("type").is_some());
        assert_eq!(diagnostics.warning_count(), 1);
        assert_eq!(diagnostics.warnings()[0].source, "arg");
    }

    #[test]
    fn default_without_brackets_is_still_a_list() {
        let (mapping, _) = mapping_for("type=float\\default=0.5");
        assert_eq!(
            mapping.unwrap().get("default"),
            Some(&OptionValue::List(vec![Scalar::Float(0.5)]))
        );
    }

    #[test]
    fn default_strips_only_one_bracket_each_side() {
        let (mapping, _) = mapping_for("type=str\\default=[[a],b]]");
        assert_eq!(
            mapping.unwrap().get("default"),
            Some(&OptionValue::List(vec![Scalar::Str("[a]".into()), Scalar::Str("b]".into())]))
        );
    }

    #[test]
    fn default_conversion_failure_is_fatal() {
        let (mapping, _) = mapping_for("type=int\\default=[1,x]");
        match mapping.unwrap_err() {
            AppError::DefaultConversion { argument, value, type_name, .. } => {
                assert_eq!(argument, "arg");
                assert_eq!(value, "x");
                assert_eq!(type_name, "int");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_type_without_resolver_fails() {
        let (mapping, _) = mapping_for("type=Path");
        assert!(matches!(mapping, Err(AppError::UnsupportedType(name)) if name == "Path"));
    }

    #[test]
    fn unknown_type_goes_to_resolver() {
        let resolver = |name: &str| -> Result<ValueType, String> {
            match name {
                "upper" => Ok(ValueType::new("upper", |raw| Ok(Scalar::Str(raw.to_uppercase())))),
                other => Err(format!("no conversion named {}", other)),
            }
        };
        let mut diagnostics = Diagnostics::default();
        let segments = split_line("type=upper\\default=[a,b]", DEFAULT_SEPARATOR).unwrap();
        let mapping =
            build_option_mapping("arg", segments, Some(&resolver), &mut diagnostics).unwrap();
        assert_eq!(
            mapping.get("default"),
            Some(&OptionValue::List(vec![Scalar::Str("A".into()), Scalar::Str("B".into())]))
        );

        let segments = split_line("type=lower", DEFAULT_SEPARATOR).unwrap();
        let err = build_option_mapping("arg", segments, Some(&resolver), &mut diagnostics)
            .unwrap_err();
        assert!(matches!(err, AppError::TypeResolution { name, .. } if name == "lower"));
    }

    #[test]
    fn builtin_wins_over_resolver() {
        let resolver = |_: &str| -> Result<ValueType, String> { Err("never called".into()) };
        let value_type = resolve_type("int", Some(&resolver)).unwrap();
        assert_eq!(value_type.name(), "int");
    }

    #[test]
    fn other_options_pass_through() {
        let (mapping, _) = mapping_for("action=store_true\\help=be loud");
        let mapping = mapping.unwrap();
        assert_eq!(mapping.get("action"), Some(&OptionValue::Text("store_true".into())));
        assert_eq!(mapping.get("help"), Some(&OptionValue::Text("be loud".into())));
    }
}
