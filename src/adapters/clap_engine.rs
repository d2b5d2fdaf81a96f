//! Argument engine backed by the clap builder API.

use std::ffi::OsString;

use clap::builder::{PossibleValuesParser, ValueRange};
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{AppError, ArgumentIdentifier, OptionMapping, OptionValue, Scalar, ValueType};
use crate::ports::ArgumentEngine;

/// How clap stores the values of one registered argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Storage {
    Flag,
    Count,
    Typed,
    Text,
    Nothing,
}

#[derive(Debug, Clone)]
struct RegisteredArgument {
    id: String,
    storage: Storage,
    multiple: bool,
    positional: bool,
    required: bool,
}

/// Collects declared arguments into a [`clap::Command`].
#[derive(Debug, Clone)]
pub struct ClapEngine {
    command: Command,
    registered: Vec<RegisteredArgument>,
}

impl ClapEngine {
    /// Start from a base command carrying name, about text and other settings.
    pub fn new(command: Command) -> Self {
        Self { command, registered: Vec::new() }
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn into_command(self) -> Command {
        self.command
    }

    /// Ids of registered arguments in registration order.
    pub fn argument_ids(&self) -> impl Iterator<Item = &str> {
        self.registered.iter().map(|registered| registered.id.as_str())
    }

    /// Parse a command line against the declared arguments.
    ///
    /// The first item is the program name, as with [`Command::try_get_matches_from`].
    pub fn try_parse_from<I, T>(&self, argv: I) -> Result<ParsedArguments, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.clone().try_get_matches_from(argv)?;
        let mut values = Map::new();
        for registered in &self.registered {
            if registered.storage == Storage::Nothing {
                continue;
            }
            values.insert(registered.id.clone(), registered.extract(&matches));
        }
        Ok(ParsedArguments { values })
    }

    fn ensure_unique(
        &self,
        id: &str,
        long: Option<&str>,
        short: Option<char>,
    ) -> Result<(), AppError> {
        let arguments = || self.command.get_arguments();
        if arguments().any(|existing| existing.get_id() == id) {
            return Err(AppError::DuplicateArgument(id.to_string()));
        }
        if let Some(long) = long {
            let taken = arguments().any(|existing| existing.get_long() == Some(long))
                || (long == "help" && !self.command.is_disable_help_flag_set());
            if taken {
                return Err(AppError::DuplicateArgument(format!("--{}", long)));
            }
        }
        if let Some(short) = short {
            let taken = arguments().any(|existing| existing.get_short() == Some(short))
                || (short == 'h' && !self.command.is_disable_help_flag_set());
            if taken {
                return Err(AppError::DuplicateArgument(format!("-{}", short)));
            }
        }
        Ok(())
    }

    /// Positionals are matched by position, so a later one must stay reachable.
    fn ensure_positional_order(&self, argument: &str, required: bool) -> Result<(), AppError> {
        let mut earlier = self.registered.iter().filter(|registered| registered.positional);
        if let Some(variadic) = earlier.clone().find(|registered| registered.multiple) {
            return Err(AppError::invalid_option(
                argument,
                "nargs",
                format!("positional '{}' already takes several values", variadic.id),
            ));
        }
        if required {
            if let Some(optional) = earlier.find(|registered| !registered.required) {
                return Err(AppError::invalid_option(
                    argument,
                    "required",
                    format!("follows the optional positional '{}'", optional.id),
                ));
            }
        }
        Ok(())
    }
}

impl Default for ClapEngine {
    fn default() -> Self {
        Self::new(Command::new(env!("CARGO_PKG_NAME")))
    }
}

impl ArgumentEngine for ClapEngine {
    fn add_argument(
        &mut self,
        identifier: &ArgumentIdentifier,
        options: &OptionMapping,
    ) -> Result<(), AppError> {
        let argument = identifier.to_string();
        let mut id = identifier.name().to_string();
        let mut arg = Arg::new(id.clone());
        let mut long = None;
        if let ArgumentIdentifier::Flag(name) = identifier {
            arg = arg.long(name.clone());
            long = Some(name.as_str());
        }

        let mut action = None;
        let mut typed = false;
        let mut multiple = false;
        let mut short = None;
        let mut required = false;
        let mut value_type: Option<ValueType> = None;
        let mut choices: Option<Vec<String>> = None;
        let mut default_count = 0;

        for (option, value) in options.iter() {
            arg = match option {
                "action" => {
                    let parsed = parse_action(&argument, value)?;
                    action = Some(parsed.clone());
                    arg.action(parsed)
                }
                "help" => arg.help(text(&argument, option, value)?.to_string()),
                "nargs" => {
                    let (range, many) = parse_nargs(&argument, value)?;
                    multiple = many;
                    arg.num_args(range)
                }
                "default" => match value {
                    OptionValue::List(items) => {
                        default_count = items.len();
                        arg.default_values(items.iter().map(Scalar::to_string))
                    }
                    _ => return Err(AppError::invalid_option(&argument, option, "expected a list")),
                },
                "type" => {
                    value_type = Some(value.as_type().cloned().ok_or_else(|| {
                        AppError::invalid_option(&argument, option, "expected a value type")
                    })?);
                    typed = true;
                    arg
                }
                "choices" => {
                    choices = Some(parse_choices(&argument, value)?);
                    arg
                }
                "required" => {
                    required = parse_flag_text(&argument, option, value)?;
                    arg.required(required)
                }
                "metavar" => arg.value_name(text(&argument, option, value)?.to_string()),
                "dest" => {
                    id = text(&argument, option, value)?.to_string();
                    arg.id(id.clone())
                }
                "short" => {
                    let letter = parse_short(identifier, &argument, value)?;
                    short = Some(letter);
                    arg.short(letter)
                }
                _ => {
                    return Err(AppError::UnsupportedOption {
                        argument,
                        option: option.to_string(),
                    });
                }
            };
        }

        let storage = match action {
            Some(ArgAction::SetTrue) | Some(ArgAction::SetFalse) => Storage::Flag,
            Some(ArgAction::Count) => Storage::Count,
            Some(ArgAction::Help) | Some(ArgAction::Version) => Storage::Nothing,
            _ if typed => Storage::Typed,
            _ => Storage::Text,
        };
        if matches!(storage, Storage::Flag | Storage::Count | Storage::Nothing) {
            if typed {
                return Err(AppError::invalid_option(
                    &argument,
                    "type",
                    "cannot be combined with a flag action",
                ));
            }
            if identifier.is_positional() {
                return Err(AppError::invalid_option(
                    &argument,
                    "action",
                    "positional arguments must take a value",
                ));
            }
        }
        if matches!(action, Some(ArgAction::Append)) {
            multiple = true;
        }
        if default_count > 1 && !multiple {
            return Err(AppError::invalid_option(
                &argument,
                "default",
                format!("{} values given but the argument takes a single value", default_count),
            ));
        }
        if choices.is_some() && !matches!(storage, Storage::Typed | Storage::Text) {
            return Err(AppError::invalid_option(
                &argument,
                "choices",
                "cannot be combined with a flag action",
            ));
        }
        arg = match (value_type, choices) {
            (Some(value_type), Some(choices)) => {
                let allowed = choices
                    .iter()
                    .map(|choice| value_type.convert(choice))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|reason| AppError::invalid_option(&argument, "choices", reason))?;
                arg.value_parser(move |raw: &str| {
                    let value = value_type.convert(raw)?;
                    if allowed.contains(&value) {
                        Ok(value)
                    } else {
                        Err(format!("'{}' is not one of {}", raw, choices.join(", ")))
                    }
                })
            }
            (Some(value_type), None) => arg.value_parser(move |raw: &str| value_type.convert(raw)),
            (None, Some(choices)) => arg.value_parser(PossibleValuesParser::new(choices)),
            (None, None) => arg,
        };

        self.ensure_unique(&id, long, short)?;
        let positional = identifier.is_positional();
        if positional {
            self.ensure_positional_order(&argument, required)?;
        }
        tracing::debug!(argument = %argument, id = %id, "registered argument");

        self.command = self.command.clone().arg(arg);
        self.registered.push(RegisteredArgument { id, storage, multiple, positional, required });
        Ok(())
    }
}

impl RegisteredArgument {
    fn extract(&self, matches: &ArgMatches) -> Value {
        match self.storage {
            Storage::Flag => matches
                .try_get_one::<bool>(&self.id)
                .ok()
                .flatten()
                .map_or(Value::Null, |flag| Value::Bool(*flag)),
            Storage::Count => matches
                .try_get_one::<u8>(&self.id)
                .ok()
                .flatten()
                .map_or(Value::Null, |count| Value::from(*count)),
            Storage::Typed => {
                let values = matches.try_get_many::<Scalar>(&self.id).ok().flatten();
                self.collect(values.map(|values| values.map(scalar_to_json).collect()))
            }
            Storage::Text => {
                let values = matches.try_get_many::<String>(&self.id).ok().flatten();
                self.collect(values.map(|values| values.cloned().map(Value::String).collect()))
            }
            Storage::Nothing => Value::Null,
        }
    }

    fn collect(&self, values: Option<Vec<Value>>) -> Value {
        match values {
            None => Value::Null,
            Some(values) if self.multiple => Value::Array(values),
            Some(values) => values.into_iter().next().unwrap_or(Value::Null),
        }
    }
}

fn scalar_to_json(scalar: &Scalar) -> Value {
    match scalar {
        Scalar::Bool(flag) => Value::Bool(*flag),
        Scalar::Int(number) => Value::from(*number),
        Scalar::Float(number) => {
            serde_json::Number::from_f64(*number).map_or(Value::Null, Value::Number)
        }
        Scalar::Str(text) => Value::String(text.clone()),
    }
}

fn text<'a>(argument: &str, option: &str, value: &'a OptionValue) -> Result<&'a str, AppError> {
    value.as_text().ok_or_else(|| AppError::invalid_option(argument, option, "expected text"))
}

fn parse_action(argument: &str, value: &OptionValue) -> Result<ArgAction, AppError> {
    let name = text(argument, "action", value)?;
    match name {
        "store" => Ok(ArgAction::Set),
        "store_true" => Ok(ArgAction::SetTrue),
        "store_false" => Ok(ArgAction::SetFalse),
        "count" => Ok(ArgAction::Count),
        "append" | "extend" => Ok(ArgAction::Append),
        "help" => Ok(ArgAction::Help),
        "version" => Ok(ArgAction::Version),
        other => Err(AppError::invalid_option(
            argument,
            "action",
            format!("unknown action '{}'", other),
        )),
    }
}

fn parse_nargs(argument: &str, value: &OptionValue) -> Result<(ValueRange, bool), AppError> {
    match value {
        OptionValue::Int(count) if *count > 0 => {
            let count = usize::try_from(*count).map_err(|e| {
                AppError::invalid_option(argument, "nargs", e.to_string())
            })?;
            Ok((ValueRange::new(count), true))
        }
        OptionValue::Int(count) => Err(AppError::invalid_option(
            argument,
            "nargs",
            format!("count must be positive, got {}", count),
        )),
        OptionValue::Text(marker) => match marker.as_str() {
            "?" => Ok((ValueRange::new(0..=1), false)),
            "*" => Ok((ValueRange::new(0..), true)),
            "+" => Ok((ValueRange::new(1..), true)),
            other => Err(AppError::invalid_option(
                argument,
                "nargs",
                format!("expected a count, '?', '*' or '+', got '{}'", other),
            )),
        },
        _ => Err(AppError::invalid_option(argument, "nargs", "expected a count or marker")),
    }
}

/// Split `choices=a,b,c` (optionally bracketed) into its entries.
fn parse_choices(argument: &str, value: &OptionValue) -> Result<Vec<String>, AppError> {
    let raw = text(argument, "choices", value)?;
    let inner = raw.strip_prefix('[').unwrap_or(raw);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    let choices: Vec<String> = inner.split(',').map(|choice| choice.trim().to_string()).collect();
    if choices.iter().any(String::is_empty) {
        return Err(AppError::invalid_option(argument, "choices", "empty choice"));
    }
    Ok(choices)
}

fn parse_flag_text(argument: &str, option: &str, value: &OptionValue) -> Result<bool, AppError> {
    match text(argument, option, value)?.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(AppError::invalid_option(
            argument,
            option,
            format!("expected true or false, got '{}'", other),
        )),
    }
}

fn parse_short(
    identifier: &ArgumentIdentifier,
    argument: &str,
    value: &OptionValue,
) -> Result<char, AppError> {
    if identifier.is_positional() {
        return Err(AppError::invalid_option(
            argument,
            "short",
            "positional arguments have no flag",
        ));
    }
    let raw = text(argument, "short", value)?;
    let raw = raw.strip_prefix('-').unwrap_or(raw);
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter != '-' => Ok(letter),
        _ => Err(AppError::invalid_option(
            argument,
            "short",
            format!("expected a single character, got '{}'", raw),
        )),
    }
}

/// Values produced by parsing a command line, keyed by argument id.
///
/// Arguments that were not given and have no default are `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedArguments {
    values: Map<String, Value>,
}

impl ParsedArguments {
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }
}
