//! Normalisation of inference API replies.
//!
//! The endpoint answers with `[{"summary_text": ...}]` on success and
//! `{"error": ...}` while the model is loading or the token is rejected.
//! Anything else is passed back verbatim as serialized JSON.

use serde_json::Value;

/// Reduce a reply body to the single summary string returned to clients.
pub fn extract_summary(body: &Value) -> String {
    let extracted = match body {
        Value::Array(items) => items
            .first()
            .and_then(|first| first.get("summary_text"))
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_string),
        Value::Object(fields) => fields.get("error").and_then(non_empty_text),
        _ => None,
    };

    extracted.unwrap_or_else(|| body.to_string())
}

/// `None` for the falsy JSON values: `null`, `false`, `0` and `""`.
fn non_empty_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
