use crate::constants::limits::{LISTED_COMMANDS, SUGGESTION_LIMIT};
use crate::errors::SdkError;
use crate::utils::suggest::suggest;

fn build_hint(input: &str, known: &[String]) -> (String, Vec<String>) {
    let suggestions = suggest(input, known, SUGGESTION_LIMIT);
    let shown: Vec<&str> = known
        .iter()
        .take(LISTED_COMMANDS)
        .map(String::as_str)
        .collect();
    let suffix = if known.len() > shown.len() { ", ..." } else { "" };
    let mut parts = Vec::new();
    if !suggestions.is_empty() {
        parts.push(format!("Did you mean: {}?", suggestions.join(", ")));
    }
    if !shown.is_empty() {
        parts.push(format!("Use one of: {}{}.", shown.join(", "), suffix));
    }
    (parts.join(" "), suggestions)
}

pub fn unknown_command_error(service: &str, command: &str, known: &[String]) -> SdkError {
    let (hint, suggestions) = build_hint(command, known);
    let mut err =
        SdkError::invalid_argument(format!("Unknown {} command `{}`", service, command));
    if !hint.is_empty() {
        err = err.with_hint(hint);
    }
    err.with_details(serde_json::json!({
        "service": service,
        "known_commands": known,
        "did_you_mean": suggestions,
    }))
}

pub fn unknown_service_error(service: &str, known: &[String]) -> SdkError {
    let (hint, suggestions) = build_hint(service, known);
    let mut err =
        SdkError::configuration(format!("No base URI configured for service `{}`", service));
    if !hint.is_empty() {
        err = err.with_hint(hint);
    }
    err.with_details(serde_json::json!({
        "configured_services": known,
        "did_you_mean": suggestions,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_lists_suggestions_and_known_names() {
        let known = vec!["GetUser".to_string(), "UpdateUser".to_string()];
        let err = unknown_command_error("profile", "GetUsr", &known);
        assert!(err.is_invalid_argument());
        assert_eq!(err.message, "Unknown profile command `GetUsr`");
        let hint = err.hint.unwrap_or_default();
        assert!(hint.contains("Did you mean: GetUser?"));
        assert!(hint.contains("Use one of: GetUser, UpdateUser."));
    }

    #[test]
    fn unknown_service_is_a_configuration_error() {
        let err = unknown_service_error("licence", &["license".to_string()]);
        assert!(err.is_configuration());
        assert_eq!(
            err.details.as_ref().map(|d| d["did_you_mean"][0].clone()),
            Some(serde_json::json!("license"))
        );
    }
}
