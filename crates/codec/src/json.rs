//! Helpers for describing untyped JSON input.

use serde_json::Value;

/// Names the JSON kind of `value`, as used in type-mismatch messages.
///
/// # Examples
///
/// ```
/// use nebula_codec::json::kind_of;
/// use serde_json::json;
///
/// assert_eq!(kind_of(&json!([1, 2])), "array");
/// assert_eq!(kind_of(&json!(null)), "null");
/// ```
#[must_use]
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
