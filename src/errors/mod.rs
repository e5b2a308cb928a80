mod sdk_error;
mod violation;

pub use sdk_error::{SdkError, SdkErrorKind};
pub use violation::Violation;
