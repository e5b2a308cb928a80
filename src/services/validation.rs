use crate::command::{ArgValue, ArgumentBag, ArgumentSchema, ValidatedArguments};
use crate::errors::{SdkError, Violation};
use serde_json::Value;

#[derive(Clone)]
pub struct Validation;

impl Validation {
    pub fn new() -> Self {
        Self
    }

    /// Checks `args` against `schema` and collects every violation.
    ///
    /// Schema entries are visited in declaration order (missing or mistyped
    /// values), then supplied keys in bag order (unknown keys). Absent
    /// optional arguments are left out of the result.
    pub fn validate_args(
        &self,
        schema: &ArgumentSchema,
        args: &ArgumentBag,
    ) -> Result<ValidatedArguments, Vec<Violation>> {
        let mut validated = ValidatedArguments::default();
        let mut violations = Vec::new();

        for (name, spec) in schema.iter() {
            match args.get(name) {
                Some(value) if spec.arg_type.accepts(value) => {
                    validated.push(name, value.clone());
                }
                Some(_) => violations.push(Violation::InvalidType {
                    name: name.to_string(),
                    expected: spec.arg_type,
                }),
                None if spec.required => match &spec.default {
                    Some(default) if spec.arg_type.accepts(default) => {
                        validated.push(name, default.clone());
                    }
                    _ => violations.push(Violation::MissingRequired {
                        name: name.to_string(),
                    }),
                },
                None => {}
            }
        }

        for key in args.keys() {
            if !schema.contains(key) {
                violations.push(Violation::UnknownKey { name: key.clone() });
            }
        }

        if violations.is_empty() {
            Ok(validated)
        } else {
            Err(violations)
        }
    }

    /// Rejects declared defaults that do not match their own argument type.
    pub fn ensure_schema_defaults(&self, schema: &ArgumentSchema) -> Result<(), SdkError> {
        for (name, spec) in schema.iter() {
            if let Some(default) = &spec.default {
                if !spec.arg_type.accepts(default) {
                    return Err(SdkError::configuration(format!(
                        "Default for `{}` must be of type {}, got {}",
                        name,
                        spec.arg_type,
                        default.kind()
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn ensure_argument_bag(&self, value: &Value) -> Result<ArgumentBag, SdkError> {
        if value.is_null() {
            return Ok(ArgumentBag::new());
        }
        let obj = value
            .as_object()
            .ok_or_else(|| SdkError::invalid_argument("Arguments must be an object"))?;
        Ok(obj
            .iter()
            .map(|(key, val)| (key.clone(), ArgValue::from(val.clone())))
            .collect())
    }

    pub fn ensure_string(&self, value: &str, label: &str) -> Result<String, SdkError> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(SdkError::configuration(format!(
                "{} must be a non-empty string",
                label
            )));
        }
        if normalized.contains('\0') {
            return Err(SdkError::configuration(format!(
                "{} must not contain null bytes",
                label
            )));
        }
        Ok(normalized.to_string())
    }
}

impl Default for Validation {
    fn default() -> Self {
        Self::new()
    }
}
