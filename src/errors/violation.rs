use crate::command::ArgType;
use serde::Serialize;
use thiserror::Error;

/// A single schema violation found while validating an argument bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Violation {
    #[error("no value provided for required argument `{name}`")]
    MissingRequired { name: String },
    #[error("invalid type for `{name}`, expected type {expected}")]
    InvalidType { name: String, expected: ArgType },
    #[error("invalid key `{name}`")]
    UnknownKey { name: String },
    #[error("invalid value for path argument `{name}`, must not be empty, `.` or `..`")]
    InvalidPathValue { name: String },
}

impl Violation {
    pub fn name(&self) -> &str {
        match self {
            Violation::MissingRequired { name }
            | Violation::InvalidType { name, .. }
            | Violation::UnknownKey { name }
            | Violation::InvalidPathValue { name } => name,
        }
    }
}
