//! Request extractor running item payload validation.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;

use crate::validation::{ItemPayload, ValidationError, validate_item_payload};

use super::handlers::ApiError;

/// A request body that passed [`validate_item_payload`].
///
/// Rejections are reported as [`ApiError`] so every failure shares one JSON shape.
pub struct ValidItem(pub ItemPayload);

impl<S> FromRequest<S> for ValidItem
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        Ok(ValidItem(validate_item_payload(&body)?))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> ValidationError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => ValidationError::UnsupportedContentType,
        JsonRejection::BytesRejection(r) if r.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            ValidationError::PayloadTooLarge(r.body_text())
        }
        JsonRejection::BytesRejection(r) => ValidationError::UnreadableBody(r.body_text()),
        other => ValidationError::MalformedJson(other.body_text()),
    }
}
