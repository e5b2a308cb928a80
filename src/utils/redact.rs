use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;

const DEFAULT_REDACTION: &str = "[REDACTED]";

static SENSITIVE_KEYS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "app_secret",
        "password",
        "secret",
        "token",
        "authorization",
    ]
    .into_iter()
    .collect()
});

static SENSITIVE_HEADER_KEYS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["authorization", "proxy-authorization", "x-api-key"]
        .into_iter()
        .collect()
});

static CREDENTIAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(Basic|Bearer)\s+[A-Za-z0-9+/=._~-]+").expect("credential redaction regex")
});

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

pub fn is_sensitive_key(key: &str) -> bool {
    let normalized = normalize_key(key);
    if normalized.is_empty() {
        return false;
    }
    SENSITIVE_KEYS.contains(normalized.as_str())
        || normalized.contains("secret")
        || normalized.contains("password")
}

pub fn is_sensitive_header(name: &str) -> bool {
    SENSITIVE_HEADER_KEYS.contains(normalize_key(name).as_str())
}

/// Masks `Basic`/`Bearer` credentials embedded in free text.
pub fn redact_text(value: &str) -> String {
    CREDENTIAL_PATTERN
        .replace_all(value, format!("$1 {}", DEFAULT_REDACTION))
        .to_string()
}

fn redact_headers(value: &Value) -> Value {
    let mut out = serde_json::Map::new();
    if let Some(map) = value.as_object() {
        for (key, entry) in map.iter() {
            if is_sensitive_header(key) {
                out.insert(key.clone(), Value::String(DEFAULT_REDACTION.to_string()));
            } else if let Some(text) = entry.as_str() {
                out.insert(key.clone(), Value::String(redact_text(text)));
            } else {
                out.insert(key.clone(), entry.clone());
            }
        }
    }
    Value::Object(out)
}

pub fn redact_object(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(redact_text(text)),
        Value::Array(items) => Value::Array(items.iter().map(redact_object).collect()),
        Value::Object(map) => {
            let mut out = serde_json::Map::new();
            for (key, entry) in map.iter() {
                if key == "headers" {
                    out.insert(key.clone(), redact_headers(entry));
                } else if is_sensitive_key(key) {
                    out.insert(key.clone(), Value::String(DEFAULT_REDACTION.to_string()));
                } else {
                    out.insert(key.clone(), redact_object(entry));
                }
            }
            Value::Object(out)
        }
        _ => value.clone(),
    }
}
