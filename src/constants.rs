pub mod http {
    pub const USER_AGENT: &str = concat!("sws-sdk-rust/", env!("CARGO_PKG_VERSION"));
    pub const ACCEPT: &str = "application/json";
    pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
    pub const BODYLESS_METHODS: &[&str] = &["GET", "DELETE", "HEAD", "OPTIONS"];
}

pub mod protocols {
    pub const ALLOWED_HTTP: &[&str] = &["http", "https"];
}

pub mod env {
    pub const APP_ID: &str = "SWS_APP_ID";
    pub const APP_SECRET: &str = "SWS_APP_SECRET";
    pub const BASE_URI_PREFIX: &str = "SWS_BASE_URI_";
    pub const LOG_LEVEL: &[&str] = &["SWS_LOG_LEVEL", "LOG_LEVEL"];
}

pub mod limits {
    pub const SUGGESTION_LIMIT: usize = 5;
    pub const LISTED_COMMANDS: usize = 24;
}
