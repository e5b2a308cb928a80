pub mod client;
pub mod command;
pub mod config;
pub mod constants;
pub mod errors;
pub mod services;
pub mod utils;

pub use client::{CommandFactory, ServiceClient};
pub use command::{
    ArgSpec, ArgType, ArgValue, ArgumentBag, ArgumentSchema, Command, CommandDefinition,
    Credentials, HttpRequestSpec, ValidatedArguments,
};
pub use config::SdkConfig;
pub use errors::{SdkError, SdkErrorKind, Violation};
