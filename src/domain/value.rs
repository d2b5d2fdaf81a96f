//! Typed option values and the conversions that produce them.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// A single converted value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{}", value),
            Scalar::Int(value) => write!(f, "{}", value),
            Scalar::Float(value) => write!(f, "{}", value),
            Scalar::Str(value) => write!(f, "{}", value),
        }
    }
}

/// Conversion from raw command-line or config text to a [`Scalar`].
pub type ConvertFn = dyn Fn(&str) -> Result<Scalar, String> + Send + Sync;

/// Resolver for `type=` names outside the built-in table.
pub type TypeResolver = dyn Fn(&str) -> Result<ValueType, String> + Send + Sync;

/// A named value conversion, the target of a `type=` option.
#[derive(Clone)]
pub struct ValueType {
    name: String,
    convert: Arc<ConvertFn>,
}

impl ValueType {
    pub fn new<F>(name: impl Into<String>, convert: F) -> Self
    where
        F: Fn(&str) -> Result<Scalar, String> + Send + Sync + 'static,
    {
        Self { name: name.into(), convert: Arc::new(convert) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn convert(&self, raw: &str) -> Result<Scalar, String> {
        (self.convert)(raw)
    }

    /// Look up a built-in conversion by name.
    pub fn builtin(name: &str) -> Option<Self> {
        let value_type = match name {
            "int" => ValueType::new(name, |raw| {
                raw.trim()
                    .parse::<i64>()
                    .map(Scalar::Int)
                    .map_err(|e| format!("invalid integer '{}': {}", raw, e))
            }),
            "float" => ValueType::new(name, |raw| {
                raw.trim()
                    .parse::<f64>()
                    .map(Scalar::Float)
                    .map_err(|e| format!("invalid float '{}': {}", raw, e))
            }),
            "str" => ValueType::new(name, |raw| Ok(Scalar::Str(raw.to_string()))),
            "bool" => ValueType::new(name, parse_bool),
            _ => return None,
        };
        Some(value_type)
    }
}

fn parse_bool(raw: &str) -> Result<Scalar, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(Scalar::Bool(true)),
        "false" | "no" | "off" | "0" => Ok(Scalar::Bool(false)),
        _ => Err(format!("invalid boolean '{}'", raw)),
    }
}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueType").field(&self.name).finish()
    }
}

impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// A coerced option value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Text(String),
    Int(i64),
    Type(ValueType),
    List(Vec<Scalar>),
}

impl OptionValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<&ValueType> {
        match self {
            OptionValue::Type(value_type) => Some(value_type),
            _ => None,
        }
    }
}
