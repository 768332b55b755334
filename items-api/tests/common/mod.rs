//! Shared test utilities for items-api integration tests.

#![allow(dead_code)]

use items_api::rest::{AppState, create_router};
use items_api::{ApiAuditLogger, Item, ItemOperations, MemoryStore};
use reqwest::{Client, Response as ReqwestResponse};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Test server wrapper running the REST API on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    prefix: String,
    shutdown_tx: tokio::sync::oneshot::Sender<()>,
}

impl TestServer {
    /// Spawn a test server with an empty store and no route prefix.
    pub async fn spawn() -> Self {
        Self::spawn_with(Vec::new(), "").await
    }

    /// Spawn a test server with seeded items and a route prefix.
    pub async fn spawn_with(items: Vec<Item>, prefix: &str) -> Self {
        let store = MemoryStore::with_items(items).expect("Invalid seed items");

        let app_state = Arc::new(AppState {
            items: ItemOperations::new(Arc::new(store)),
            audit: Arc::new(ApiAuditLogger::new_noop()),
        });

        let router = create_router(app_state, prefix);

        // Use port 0 to let OS choose available port
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let listener = TcpListener::bind(&addr).await.expect("Failed to bind");
        let actual_addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("Server error");
        });

        Self {
            addr: actual_addr,
            client: Client::new(),
            prefix: prefix.trim_end_matches('/').to_string(),
            shutdown_tx,
        }
    }

    /// Base URL of the server root (docs live here).
    pub fn root_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Base URL for the item routes.
    pub fn base_url(&self) -> String {
        format!("{}{}", self.root_url(), self.prefix)
    }

    /// Perform a GET request.
    pub async fn get(&self, path: &str) -> ReqwestResponse {
        self.client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await
            .expect("Request failed")
    }

    /// Perform a POST request with JSON body.
    pub async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> ReqwestResponse {
        self.client
            .post(format!("{}{}", self.base_url(), path))
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    /// Perform a POST request with a raw body and no JSON content type.
    pub async fn post_raw(&self, path: &str, body: &'static str) -> ReqwestResponse {
        self.client
            .post(format!("{}{}", self.base_url(), path))
            .body(body)
            .send()
            .await
            .expect("Request failed")
    }

    /// Perform a POST request with a JSON content type but an arbitrary body.
    pub async fn post_json_text(&self, path: &str, body: &'static str) -> ReqwestResponse {
        self.client
            .post(format!("{}{}", self.base_url(), path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Request failed")
    }

    /// Perform a PUT request with JSON body.
    pub async fn put_json<T: Serialize>(&self, path: &str, body: &T) -> ReqwestResponse {
        self.client
            .put(format!("{}{}", self.base_url(), path))
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    /// Perform a DELETE request.
    pub async fn delete(&self, path: &str) -> ReqwestResponse {
        self.client
            .delete(format!("{}{}", self.base_url(), path))
            .send()
            .await
            .expect("Request failed")
    }

    /// Shutdown the server.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
    }
}
