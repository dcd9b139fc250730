//! Contact-form submission - transient, logged but never stored.

use crate::error::{CoreError, Result};

use serde_json::Value;

/// A contact-form submission. All three fields are required and non-empty.
/// Lives only for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Extract a submission from an untyped JSON body.
    ///
    /// A field counts as missing when the key is absent, the value is null
    /// or not a string, or the string is empty. No trimming is applied.
    pub fn from_json(body: &Value) -> Result<Self> {
        Ok(Self {
            name: required_field(body, "name")?,
            email: required_field(body, "email")?,
            message: required_field(body, "message")?,
        })
    }
}

fn required_field(body: &Value, key: &str) -> Result<String> {
    match body.get(key).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(CoreError::validation(format!("{} is required", key))),
    }
}
