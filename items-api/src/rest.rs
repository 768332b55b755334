//! REST API: axum handlers, routes, and the OpenAPI document.

mod extract;
mod handlers;
mod routes;

pub use extract::ValidItem;
pub use handlers::*;
pub use routes::{ApiDoc, api_doc, create_router, normalize_prefix};
