use crate::errors::Violation;
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SdkErrorKind {
    /// The caller supplied arguments that do not satisfy the command schema.
    InvalidArgument,
    /// A command declaration or base URI is malformed. Not recoverable by the caller.
    Configuration,
}

#[derive(Debug, Clone, Serialize)]
pub struct SdkError {
    pub kind: SdkErrorKind,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl SdkError {
    pub fn new(kind: SdkErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            hint: None,
            details: None,
            violations: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(SdkErrorKind::InvalidArgument, "INVALID_ARGUMENT", message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(SdkErrorKind::Configuration, "CONFIGURATION", message)
    }

    /// Aggregates every violation into one caller-facing error.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        let message = violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        let mut err = Self::invalid_argument(message);
        err.violations = violations;
        err
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind == SdkErrorKind::InvalidArgument
    }

    pub fn is_configuration(&self) -> bool {
        self.kind == SdkErrorKind::Configuration
    }
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SdkError {}

impl From<url::ParseError> for SdkError {
    fn from(err: url::ParseError) -> Self {
        SdkError::configuration(format!("Invalid base URI: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ArgType;

    #[test]
    fn from_violations_joins_messages_in_order() {
        let err = SdkError::from_violations(vec![
            Violation::MissingRequired {
                name: "user_id".to_string(),
            },
            Violation::InvalidType {
                name: "limit".to_string(),
                expected: ArgType::Integer,
            },
        ]);
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.message,
            "no value provided for required argument `user_id`; invalid type for `limit`, expected type integer"
        );
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn serializes_without_empty_optionals() {
        let err = SdkError::configuration("Invalid base URI");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["kind"], "configuration");
        assert_eq!(value["code"], "CONFIGURATION");
        assert!(value.get("hint").is_none());
        assert!(value.get("violations").is_none());
    }
}
