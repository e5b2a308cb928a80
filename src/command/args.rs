use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Declared type of a command argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgType {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "DateTime")]
    DateTime,
}

impl ArgType {
    pub fn as_str(self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Integer => "integer",
            ArgType::DateTime => "DateTime",
        }
    }

    /// Strict match, no coercion between representations.
    pub fn accepts(self, value: &ArgValue) -> bool {
        matches!(
            (self, value),
            (ArgType::String, ArgValue::String(_))
                | (ArgType::Integer, ArgValue::Integer(_))
                | (ArgType::DateTime, ArgValue::DateTime(_))
        )
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An untyped argument value as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<FixedOffset>),
    Json(Value),
}

impl ArgValue {
    pub fn kind(&self) -> &'static str {
        match self {
            ArgValue::String(_) => "string",
            ArgValue::Integer(_) => "integer",
            ArgValue::Float(_) => "float",
            ArgValue::Boolean(_) => "boolean",
            ArgValue::DateTime(_) => "DateTime",
            ArgValue::Json(_) => "json",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ArgValue::Integer(num) => Some(*num),
            _ => None,
        }
    }

    /// Renders the value the way it goes on the wire (path segment, query or form field).
    pub fn to_wire_string(&self) -> String {
        match self {
            ArgValue::String(text) => text.clone(),
            ArgValue::Integer(num) => num.to_string(),
            ArgValue::Float(num) => num.to_string(),
            ArgValue::Boolean(flag) => flag.to_string(),
            ArgValue::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, false),
            ArgValue::Json(value) => match value {
                Value::Null => String::new(),
                Value::String(text) => text.clone(),
                other => other.to_string(),
            },
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::String(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::String(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Integer(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Integer(value.into())
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        ArgValue::Integer(value.into())
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Float(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Boolean(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ArgValue {
    fn from(value: DateTime<Tz>) -> Self {
        ArgValue::DateTime(value.fixed_offset())
    }
}

impl From<Value> for ArgValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => ArgValue::String(text),
            Value::Bool(flag) => ArgValue::Boolean(flag),
            Value::Number(num) => match num.as_i64() {
                Some(int) => ArgValue::Integer(int),
                None => match num.as_f64() {
                    Some(float) => ArgValue::Float(float),
                    None => ArgValue::Json(Value::Number(num)),
                },
            },
            other => ArgValue::Json(other),
        }
    }
}

/// Raw caller arguments for one command invocation.
pub type ArgumentBag = BTreeMap<String, ArgValue>;

#[derive(Debug, Clone, PartialEq)]
pub struct ArgSpec {
    pub arg_type: ArgType,
    pub required: bool,
    pub default: Option<ArgValue>,
}

impl ArgSpec {
    pub fn new(arg_type: ArgType, required: bool) -> Self {
        Self {
            arg_type,
            required,
            default: None,
        }
    }
}

/// Declared arguments of a command, kept in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentSchema {
    entries: Vec<(String, ArgSpec)>,
}

impl ArgumentSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(self, name: impl Into<String>, arg_type: ArgType) -> Self {
        self.arg(name, ArgSpec::new(arg_type, true))
    }

    pub fn optional(self, name: impl Into<String>, arg_type: ArgType) -> Self {
        self.arg(name, ArgSpec::new(arg_type, false))
    }

    /// Sets the default of the most recently declared argument.
    pub fn with_default(mut self, value: impl Into<ArgValue>) -> Self {
        if let Some((_, spec)) = self.entries.last_mut() {
            spec.default = Some(value.into());
        }
        self
    }

    pub fn arg(mut self, name: impl Into<String>, spec: ArgSpec) -> Self {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = spec,
            None => self.entries.push((name, spec)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ArgSpec> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, spec)| spec)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgSpec)> {
        self.entries.iter().map(|(key, spec)| (key.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Arguments that passed validation, in schema declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedArguments {
    entries: Vec<(String, ArgValue)>,
}

impl ValidatedArguments {
    pub(crate) fn push(&mut self, name: &str, value: ArgValue) {
        self.entries.push((name.to_string(), value));
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(key, _)| key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
