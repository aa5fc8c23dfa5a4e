//! Serde helper functions for request body deserialization.
//!
//! Clients send text fields either as JSON strings or as bare numbers (phone
//! numbers and government ids are the usual suspects), and sometimes send
//! blank strings for fields they did not fill in.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional text field.
///
/// Strings are taken as-is, numbers are rendered to their decimal text and
/// blank strings or `null` become `None`. Any other JSON type is an error.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s).filter(|s| !s.trim().is_empty())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string, found {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
