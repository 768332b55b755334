use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

use crate::audit::ApiAuditLogger;
use crate::item::Item;
use crate::operations::ItemOperations;
use crate::store::StoreError;
use crate::validation::{ItemPayload, ValidationError};

use super::extract::ValidItem;

/// Shared application state
pub struct AppState {
    pub items: ItemOperations,
    pub audit: Arc<ApiAuditLogger>,
}

/// API error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    pub error: String,
    pub code: u32,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code {
            404 => StatusCode::NOT_FOUND,
            409 => StatusCode::CONFLICT,
            400 => StatusCode::BAD_REQUEST,
            413 => StatusCode::PAYLOAD_TOO_LARGE,
            415 => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(msg) => ApiError {
                error: msg,
                code: 404,
            },
            StoreError::Conflict(msg) => ApiError {
                error: msg,
                code: 409,
            },
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        let code = match e {
            ValidationError::PayloadTooLarge(_) => 413,
            ValidationError::UnsupportedContentType => 415,
            _ => 400,
        };
        ApiError {
            error: e.to_string(),
            code,
        }
    }
}

/// Response for delete item
#[derive(Serialize, ToSchema)]
pub struct DeleteItemResponse {
    pub message: String,
}

/// List all items
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "List of items", body = Vec<Item>)
    ),
    tag = "items"
)]
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.items.list().await?;
    Ok(Json(items))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = ApiError)
    ),
    tag = "items"
)]
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let item = state.items.get(&id).await?;
    Ok(Json(item))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Invalid request body", body = ApiError),
        (status = 413, description = "Request body too large", body = ApiError),
        (status = 415, description = "Body is not JSON", body = ApiError)
    ),
    tag = "items"
)]
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    ValidItem(req): ValidItem,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = state.items.create(req.name).await?;
    state.audit.item_created(&item.id, &item.name);
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an item's name
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, description = "Invalid request body", body = ApiError),
        (status = 404, description = "Item not found", body = ApiError),
        (status = 413, description = "Request body too large", body = ApiError),
        (status = 415, description = "Body is not JSON", body = ApiError)
    ),
    tag = "items"
)]
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidItem(req): ValidItem,
) -> Result<Json<Item>, ApiError> {
    let item = state.items.update(&id, req.name).await?;
    state.audit.item_updated(&item.id, &item.name);
    Ok(Json(item))
}

/// Delete an item
///
/// Unknown IDs are not an error; the response is the same either way.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item removed", body = DeleteItemResponse)
    ),
    tag = "items"
)]
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteItemResponse>, ApiError> {
    let outcome = state.items.delete(&id).await?;
    if !outcome.removed {
        debug!("Delete of unknown item {}", id);
    }
    state.audit.item_deleted(&outcome.id, outcome.removed);
    Ok(Json(DeleteItemResponse {
        message: outcome.message(),
    }))
}
