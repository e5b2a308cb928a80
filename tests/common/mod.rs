#![allow(dead_code)]

use once_cell::sync::Lazy;
use reqwest::Method;
use std::sync::Mutex;
use sws_sdk::{ArgType, ArgValue, ArgumentBag, ArgumentSchema, CommandDefinition};

pub static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub fn restore_env(key: &str, previous: Option<String>) {
    match previous {
        Some(value) => std::env::set_var(key, value),
        None => std::env::remove_var(key),
    }
}

pub fn bag(pairs: Vec<(&str, ArgValue)>) -> ArgumentBag {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// `DELETE /products/{product_id}` on the license service.
pub struct ProductDelete;

impl CommandDefinition for ProductDelete {
    fn http_method(&self) -> Method {
        Method::DELETE
    }

    fn uri_path(&self) -> String {
        "/products/{product_id}".to_string()
    }

    fn args_definition(&self) -> ArgumentSchema {
        ArgumentSchema::new().required("product_id", ArgType::String)
    }

    fn name(&self) -> &str {
        "ProductDelete"
    }
}

/// `GET /users/{user_id}/products` with paging and a date filter.
pub struct UserProductsList;

impl CommandDefinition for UserProductsList {
    fn http_method(&self) -> Method {
        Method::GET
    }

    fn uri_path(&self) -> String {
        "/users/{user_id}/products".to_string()
    }

    fn args_definition(&self) -> ArgumentSchema {
        ArgumentSchema::new()
            .required("user_id", ArgType::Integer)
            .optional("updated_since", ArgType::DateTime)
            .optional("status", ArgType::String)
            .required("page", ArgType::Integer)
            .with_default(1)
    }
}

/// `PUT /users/{user_id}` with form fields.
pub struct UserUpdate;

impl CommandDefinition for UserUpdate {
    fn http_method(&self) -> Method {
        Method::PUT
    }

    fn uri_path(&self) -> String {
        "/users/{user_id}".to_string()
    }

    fn args_definition(&self) -> ArgumentSchema {
        ArgumentSchema::new()
            .required("user_id", ArgType::Integer)
            .optional("email_address", ArgType::String)
            .optional("first_name", ArgType::String)
    }
}

/// Declaration whose every part is chosen by the test.
pub struct Declared {
    pub method: Method,
    pub path: String,
    pub schema: ArgumentSchema,
}

impl CommandDefinition for Declared {
    fn http_method(&self) -> Method {
        self.method.clone()
    }

    fn uri_path(&self) -> String {
        self.path.clone()
    }

    fn args_definition(&self) -> ArgumentSchema {
        self.schema.clone()
    }
}
