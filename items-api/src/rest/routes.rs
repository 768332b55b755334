use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa::openapi::server::Server;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, AppState};
use crate::item::Item;
use crate::validation::ItemPayload;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items API",
        version = "0.1.0",
        description = "REST API for an in-memory collection of items. Items are created with a server-generated ID and can be listed, fetched, renamed, and removed.",
        license(name = "MIT")
    ),
    tags(
        (name = "items", description = "Item CRUD operations")
    ),
    paths(
        handlers::list_items,
        handlers::get_item,
        handlers::create_item,
        handlers::update_item,
        handlers::delete_item,
    ),
    components(schemas(
        Item,
        ItemPayload,
        handlers::DeleteItemResponse,
        handlers::ApiError,
    ))
)]
pub struct ApiDoc;

/// OpenAPI document for item routes mounted under `prefix`.
pub fn api_doc(prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if !prefix.is_empty() {
        doc.servers = Some(vec![Server::new(prefix)]);
    }
    doc
}

/// Normalize a route prefix to either "" or "/segment[/segment...]".
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

pub fn create_router(state: Arc<AppState>, prefix: &str) -> Router {
    let prefix = normalize_prefix(prefix);

    let item_routes = Router::new()
        .route(
            "/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/items/{id}",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        );

    // axum refuses to nest at the root
    let api = if prefix.is_empty() {
        item_routes
    } else {
        Router::new().nest(&prefix, item_routes)
    };

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc(&prefix)))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
