//! Response normalisation
//!
//! Deployments disagree on the name of the field holding the commented code,
//! and models like to wrap their answer in a Markdown code fence.

use crate::config::{COMMENT_RESPONSE_KEY, UPLOAD_RESPONSE_KEY};
use crate::error::{Error, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Opening fence with an optional language tag, at the very start
fn opening_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\A\s*```[\w+#.-]*[ \t]*\r?\n").expect("hardcoded regex is valid"))
}

/// Closing fence at the very end
fn closing_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\r?\n?```\s*\z").expect("hardcoded regex is valid"))
}

/// Remove a leading and trailing code fence, then trim
pub fn strip_code_fence(text: &str) -> String {
    let text = opening_fence().replace(text, "");
    let text = closing_fence().replace(&text, "");
    text.trim().to_string()
}

/// Pull the commented code out of a response body
///
/// `primary_key` is tried first, then every other known key name. The value
/// comes back with fences stripped.
pub fn extract_commented_code(body: &Value, primary_key: &str) -> Result<String> {
    let candidates = [primary_key, COMMENT_RESPONSE_KEY, UPLOAD_RESPONSE_KEY];

    let raw = candidates
        .iter()
        .find_map(|key| body.get(*key))
        .ok_or_else(|| {
            Error::Parse(format!(
                "response has no '{primary_key}' field"
            ))
        })?;

    let raw = raw
        .as_str()
        .ok_or_else(|| Error::Parse(format!("'{primary_key}' is not a string")))?;

    Ok(strip_code_fence(raw))
}
