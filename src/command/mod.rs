mod args;
mod auth;
pub mod builder;
mod request;

pub use args::{ArgSpec, ArgType, ArgValue, ArgumentBag, ArgumentSchema, ValidatedArguments};
pub use auth::Credentials;
pub use request::HttpRequestSpec;

use crate::errors::SdkError;
use crate::services::logger::Logger;
use crate::services::validation::Validation;
use once_cell::sync::OnceCell;
use reqwest::Method;
use std::sync::Arc;

/// Declaration of a single endpoint: method, path template and argument schema.
pub trait CommandDefinition: Send + Sync {
    fn http_method(&self) -> Method;

    /// Path template; `{name}` tokens are filled from arguments of the same name.
    fn uri_path(&self) -> String;

    fn args_definition(&self) -> ArgumentSchema;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

pub struct Command {
    credentials: Credentials,
    base_uri: String,
    args: ArgumentBag,
    definition: Arc<dyn CommandDefinition>,
    validation: Validation,
    logger: Logger,
    request: OnceCell<HttpRequestSpec>,
}

impl Command {
    pub fn new(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
        base_uri: impl Into<String>,
        args: ArgumentBag,
        definition: Arc<dyn CommandDefinition>,
    ) -> Self {
        Self::with_credentials(
            Credentials::new(app_id, app_secret),
            base_uri,
            args,
            definition,
        )
    }

    pub fn with_credentials(
        credentials: Credentials,
        base_uri: impl Into<String>,
        args: ArgumentBag,
        definition: Arc<dyn CommandDefinition>,
    ) -> Self {
        Self {
            credentials,
            base_uri: base_uri.into(),
            args,
            definition,
            validation: Validation::new(),
            logger: Logger::new("sws").child("command"),
            request: OnceCell::new(),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn http_method(&self) -> Method {
        self.definition.http_method()
    }

    pub fn uri_path(&self) -> String {
        self.definition.uri_path()
    }

    pub fn args_definition(&self) -> ArgumentSchema {
        self.definition.args_definition()
    }

    pub fn args(&self) -> &ArgumentBag {
        &self.args
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Builds the request on first call and returns the same value afterwards.
    ///
    /// Failures are not cached, so a failing command reports the same error
    /// on every call.
    pub fn get_request(&self) -> Result<HttpRequestSpec, SdkError> {
        self.request
            .get_or_try_init(|| self.build())
            .cloned()
    }

    fn build(&self) -> Result<HttpRequestSpec, SdkError> {
        let result = builder::build_request(
            self.definition.as_ref(),
            &self.credentials,
            &self.base_uri,
            &self.args,
            &self.validation,
        );
        match &result {
            Ok(spec) => self.logger.debug(
                "request built",
                Some(&serde_json::json!({
                    "command": self.definition.name(),
                    "request": spec.redacted(),
                })),
            ),
            Err(err) if err.is_invalid_argument() => self.logger.warn(
                "invalid command arguments",
                Some(&serde_json::json!({
                    "command": self.definition.name(),
                    "violations": err.violations(),
                })),
            ),
            Err(err) => self.logger.error(
                "command declaration rejected",
                Some(&serde_json::json!({
                    "command": self.definition.name(),
                    "error": err,
                })),
            ),
        }
        result
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("definition", &self.definition.name())
            .field("credentials", &self.credentials)
            .field("base_uri", &self.base_uri)
            .field("args", &self.args)
            .finish()
    }
}
