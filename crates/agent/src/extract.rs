//! Tolerant JSON extraction from free-form model output.
//!
//! The remote service is only *asked* to reply with JSON; the reply may
//! arrive wrapped in markdown code fences or surrounded by prose. This
//! helper pulls out the outermost `{...}` span so the callers' parsers
//! see just the candidate JSON. Callers treat extraction failure with
//! their own documented fallback.

/// Coerce a JSON value to f64, accepting numbers and numeric strings.
///
/// Models sometimes quote scores (`"score": "0.9"`); those coerce the
/// same as plain numbers. Anything else is `None`.
pub fn coerce_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Extract the outermost JSON object from a model reply.
///
/// Handles:
/// - Clean JSON (no wrapping)
/// - Markdown code block wrapping (```json ... ```)
/// - Explanatory text before/after the JSON
///
/// Returns `None` when no object boundaries are present.
pub fn extract_json(response: &str) -> Option<&str> {
    let trimmed = response.trim();

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;

    if start <= end {
        Some(&trimmed[start..=end])
    } else {
        None
    }
}
