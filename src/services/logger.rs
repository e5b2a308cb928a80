use crate::constants::env::LOG_LEVEL;
use crate::errors::SdkError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Verbosity threshold; later variants are more verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    const EMITTED: [LogLevel; 4] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    fn from_env() -> Self {
        LOG_LEVEL
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find_map(|raw| raw.parse().ok())
            .unwrap_or(LogLevel::Warn)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LogLevel::Off => "OFF",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        };
        f.pad(text)
    }
}

impl FromStr for LogLevel {
    type Err = SdkError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" | "trace" => Ok(LogLevel::Debug),
            other => Err(SdkError::configuration(format!(
                "Unknown log level `{}`",
                other
            ))),
        }
    }
}

/// Context-scoped stderr logger. Children share the parent's message counts.
#[derive(Debug, Clone)]
pub struct Logger {
    context: String,
    level: LogLevel,
    emitted: Arc<Mutex<BTreeMap<LogLevel, u64>>>,
}

impl Logger {
    pub fn new(context: &str) -> Self {
        Self {
            context: context.to_string(),
            level: LogLevel::from_env(),
            emitted: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    pub fn child(&self, suffix: &str) -> Self {
        let mut child = self.clone();
        if !suffix.is_empty() {
            child.context = format!("{}:{}", self.context, suffix);
        }
        child
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.set_level(level);
        self
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level <= self.level
    }

    fn log(&self, level: LogLevel, message: &str, meta: Option<&Value>) {
        if !self.enabled(level) {
            return;
        }
        if let Ok(mut emitted) = self.emitted.lock() {
            *emitted.entry(level).or_insert(0) += 1;
        }
        let meta_suffix = meta
            .filter(|m| !m.is_null())
            .map(|m| format!(" {}", m))
            .unwrap_or_default();
        eprintln!(
            "[{}] {:<5} [{}] {}{}",
            chrono::Utc::now().to_rfc3339(),
            level,
            self.context,
            message,
            meta_suffix
        );
    }

    pub fn error(&self, message: &str, meta: Option<&Value>) {
        self.log(LogLevel::Error, message, meta);
    }

    pub fn warn(&self, message: &str, meta: Option<&Value>) {
        self.log(LogLevel::Warn, message, meta);
    }

    pub fn info(&self, message: &str, meta: Option<&Value>) {
        self.log(LogLevel::Info, message, meta);
    }

    pub fn debug(&self, message: &str, meta: Option<&Value>) {
        self.log(LogLevel::Debug, message, meta);
    }

    pub fn stats(&self) -> Value {
        let emitted = self.emitted.lock().unwrap_or_else(|err| err.into_inner());
        let mut out = serde_json::Map::new();
        out.insert(
            "level".to_string(),
            Value::String(self.level.to_string().to_lowercase()),
        );
        out.insert("context".to_string(), Value::String(self.context.clone()));
        for level in LogLevel::EMITTED {
            let count = emitted.get(&level).copied().unwrap_or(0);
            out.insert(level.to_string().to_lowercase(), count.into());
        }
        Value::Object(out)
    }
}
