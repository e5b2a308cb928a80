use crate::command::{ArgumentBag, Command, CommandDefinition, Credentials, HttpRequestSpec};
use crate::config::SdkConfig;
use crate::errors::SdkError;
use crate::services::logger::Logger;
use crate::services::validation::Validation;
use crate::utils::lookup_errors::unknown_command_error;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

pub type CommandFactory = Arc<dyn Fn() -> Arc<dyn CommandDefinition> + Send + Sync>;

/// One REST service: its base URI, credentials and the commands it exposes by name.
#[derive(Clone)]
pub struct ServiceClient {
    service: String,
    base_uri: String,
    credentials: Credentials,
    commands: HashMap<String, CommandFactory>,
    validation: Validation,
    logger: Logger,
}

impl ServiceClient {
    pub fn new(
        service: impl Into<String>,
        credentials: Credentials,
        base_uri: impl Into<String>,
    ) -> Self {
        let service = service.into();
        let logger = Logger::new("sws").child(&service);
        Self {
            service,
            base_uri: base_uri.into(),
            credentials,
            commands: HashMap::new(),
            validation: Validation::new(),
            logger,
        }
    }

    pub fn from_config(config: &SdkConfig, service: &str) -> Result<Self, SdkError> {
        config.validate()?;
        let base_uri = config.base_uri(service)?;
        Ok(Self::new(
            service.trim().to_lowercase(),
            config.credentials(),
            base_uri,
        ))
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Registers a factory under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Arc<dyn CommandDefinition> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.commands.insert(name.clone(), Arc::new(factory)).is_some() {
            self.logger.warn(
                "command re-registered",
                Some(&serde_json::json!({ "command": name })),
            );
        }
    }

    pub fn with_command<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn CommandDefinition> + Send + Sync + 'static,
    {
        self.register(name, factory);
        self
    }

    /// Registers a stateless definition that is shared by every invocation.
    pub fn with_definition<D>(self, name: impl Into<String>, definition: D) -> Self
    where
        D: CommandDefinition + 'static,
    {
        let shared: Arc<dyn CommandDefinition> = Arc::new(definition);
        self.with_command(name, move || shared.clone())
    }

    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn command(&self, name: &str, args: ArgumentBag) -> Result<Command, SdkError> {
        let factory = self
            .commands
            .get(name)
            .ok_or_else(|| unknown_command_error(&self.service, name, &self.command_names()))?;
        Ok(Command::with_credentials(
            self.credentials.clone(),
            self.base_uri.clone(),
            args,
            factory(),
        )
        .with_logger(self.logger.child(name)))
    }

    pub fn request(&self, name: &str, args: ArgumentBag) -> Result<HttpRequestSpec, SdkError> {
        self.command(name, args)?.get_request()
    }

    /// Same as [`ServiceClient::request`] with arguments given as a JSON object.
    pub fn request_json(&self, name: &str, args: &Value) -> Result<HttpRequestSpec, SdkError> {
        let bag = self.validation.ensure_argument_bag(args)?;
        self.request(name, bag)
    }
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service", &self.service)
            .field("base_uri", &self.base_uri)
            .field("credentials", &self.credentials)
            .field("commands", &self.command_names())
            .finish()
    }
}
