use std::sync::Arc;

use tracing::info;

/// API Server audit logger
///
/// Emits one `tracing` event per item mutation on the `audit` target, so
/// audit records can be routed separately with `RUST_LOG=audit=info`.
pub struct ApiAuditLogger {
    enabled: bool,
}

impl ApiAuditLogger {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn new_noop() -> Self {
        Self { enabled: false }
    }

    pub fn item_created(&self, item_id: &str, item_name: &str) {
        if self.enabled {
            info!(
                target: "audit",
                object_id = item_id,
                "Item created: {} ({})",
                item_name,
                item_id
            );
        }
    }

    pub fn item_updated(&self, item_id: &str, item_name: &str) {
        if self.enabled {
            info!(
                target: "audit",
                object_id = item_id,
                "Item updated: {} ({})",
                item_name,
                item_id
            );
        }
    }

    pub fn item_deleted(&self, item_id: &str, removed: bool) {
        if self.enabled {
            info!(target: "audit", object_id = item_id, removed, "Item deleted: {}", item_id);
        }
    }
}

impl Default for ApiAuditLogger {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_audit_logger(enabled: bool) -> Arc<ApiAuditLogger> {
    if enabled {
        Arc::new(ApiAuditLogger::new())
    } else {
        Arc::new(ApiAuditLogger::new_noop())
    }
}
