pub mod lookup_errors;
pub mod redact;
pub mod suggest;
pub mod template;
