use crate::command::Credentials;
use crate::constants::env as env_constants;
use crate::errors::SdkError;
use crate::services::validation::Validation;
use crate::utils::lookup_errors::unknown_service_error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Credentials and per-service base URIs shared by every client.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkConfig {
    pub app_id: String,
    pub app_secret: String,
    #[serde(default)]
    pub base_uri: BTreeMap<String, String>,
}

impl SdkConfig {
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            base_uri: BTreeMap::new(),
        }
    }

    pub fn with_base_uri(mut self, service: &str, uri: impl Into<String>) -> Self {
        self.base_uri
            .insert(service.trim().to_lowercase(), uri.into());
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, SdkError> {
        let mut config: SdkConfig = serde_json::from_value(value.clone())
            .map_err(|err| SdkError::configuration(format!("Invalid SDK config: {}", err)))?;
        config.base_uri = config
            .base_uri
            .into_iter()
            .map(|(service, uri)| (service.trim().to_lowercase(), uri))
            .collect();
        Ok(config)
    }

    /// Reads `SWS_APP_ID`, `SWS_APP_SECRET` and every `SWS_BASE_URI_<SERVICE>`.
    pub fn from_env() -> Result<Self, SdkError> {
        let read = |key: &str| {
            std::env::var(key)
                .map_err(|_| SdkError::configuration(format!("{} is not set", key)))
        };
        let mut config = SdkConfig::new(
            read(env_constants::APP_ID)?,
            read(env_constants::APP_SECRET)?,
        );
        for (key, value) in std::env::vars() {
            if let Some(service) = key.strip_prefix(env_constants::BASE_URI_PREFIX) {
                if !service.is_empty() && !value.trim().is_empty() {
                    config = config.with_base_uri(service, value.trim());
                }
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        let validation = Validation::new();
        validation.ensure_string(&self.app_id, "app_id")?;
        validation.ensure_string(&self.app_secret, "app_secret")?;
        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.app_id.clone(), self.app_secret.clone())
    }

    pub fn base_uri(&self, service: &str) -> Result<&str, SdkError> {
        let key = service.trim().to_lowercase();
        self.base_uri.get(&key).map(String::as_str).ok_or_else(|| {
            let known: Vec<String> = self.base_uri.keys().cloned().collect();
            unknown_service_error(service, &known)
        })
    }

    pub fn services(&self) -> Vec<&str> {
        self.base_uri.keys().map(String::as_str).collect()
    }
}

impl fmt::Debug for SdkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkConfig")
            .field("app_id", &self.app_id)
            .field("app_secret", &"[REDACTED]")
            .field("base_uri", &self.base_uri)
            .finish()
    }
}
