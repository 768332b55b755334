//! Shape validation for item request bodies.
//!
//! Create and update share one contract: a JSON object with a required
//! string `name`. Extra properties are ignored.

use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

/// Body accepted by create and update.
#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ItemPayload {
    /// Item name
    pub name: String,
}

/// Reasons a request body is rejected before any operation runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("body must be object")]
    NotAnObject,

    #[error("body must have required property '{0}'")]
    MissingProperty(&'static str),

    #[error("body/{0} must be string")]
    NotAString(&'static str),

    #[error("invalid JSON body: {0}")]
    MalformedJson(String),

    #[error("expected request with `Content-Type: application/json`")]
    UnsupportedContentType,

    #[error("request body too large: {0}")]
    PayloadTooLarge(String),

    #[error("failed to read request body: {0}")]
    UnreadableBody(String),
}

/// Check `body` against the item payload contract.
pub fn validate_item_payload(body: &Value) -> Result<ItemPayload, ValidationError> {
    let fields = body.as_object().ok_or(ValidationError::NotAnObject)?;

    // `null` counts as absent
    match fields.get("name") {
        None | Some(Value::Null) => Err(ValidationError::MissingProperty("name")),
        Some(Value::String(name)) => Ok(ItemPayload { name: name.clone() }),
        Some(_) => Err(ValidationError::NotAString("name")),
    }
}
