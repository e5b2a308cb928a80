use crate::errors::SdkError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder regex"));

/// Names referenced as `{name}` tokens, in template order.
///
/// Each name may appear once. Braces that do not form a valid token are
/// rejected.
pub fn placeholder_names(template: &str) -> Result<Vec<String>, SdkError> {
    let mut names = Vec::new();
    let mut seen = HashSet::new();
    for caps in PLACEHOLDER.captures_iter(template) {
        let name = caps[1].to_string();
        if !seen.insert(name.clone()) {
            return Err(SdkError::configuration(format!(
                "Placeholder `{{{}}}` appears more than once in path template `{}`",
                name, template
            )));
        }
        names.push(name);
    }
    let leftover = PLACEHOLDER.replace_all(template, "");
    if leftover.contains('{') || leftover.contains('}') {
        return Err(SdkError::configuration(format!(
            "Malformed placeholder in path template `{}`",
            template
        )));
    }
    Ok(names)
}

fn render_segment<F>(segment: &str, template: &str, lookup: &F) -> Result<String, SdkError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::new();
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(segment) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&segment[last..whole.start()]);
        let value = lookup(name.as_str()).ok_or_else(|| {
            SdkError::configuration(format!(
                "Unresolved placeholder `{{{}}}` in path template `{}`",
                name.as_str(),
                template
            ))
            .with_hint("Declare it as a required argument of the command.")
        })?;
        out.push_str(&value);
        last = whole.end();
    }
    out.push_str(&segment[last..]);
    Ok(out)
}

/// Splits a path template into raw (unencoded) segments with placeholders substituted.
///
/// The leading slash is dropped; a trailing slash yields a trailing empty segment.
pub fn render_path_segments<F>(template: &str, lookup: F) -> Result<Vec<String>, SdkError>
where
    F: Fn(&str) -> Option<String>,
{
    template
        .trim_start_matches('/')
        .split('/')
        .map(|segment| render_segment(segment, template, &lookup))
        .collect()
}
