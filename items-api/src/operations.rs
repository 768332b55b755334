//! Item operations - the client-facing CRUD behaviors over an ItemStore.

use std::sync::Arc;

use crate::item::Item;
use crate::store::{ItemStore, Result, StoreError};

/// Result of a delete.
///
/// Deletes always succeed; `removed` records whether an item actually went away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub id: String,
    pub removed: bool,
}

impl DeleteOutcome {
    /// Message reported to clients.
    pub fn message(&self) -> String {
        format!("Item {} has been removed", self.id)
    }
}

/// Create/get/list/update/delete over a shared store.
#[derive(Clone)]
pub struct ItemOperations {
    store: Arc<dyn ItemStore>,
}

impl ItemOperations {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Create an item with a freshly generated ID.
    pub async fn create(&self, name: String) -> Result<Item> {
        let item = Item {
            id: uuid::Uuid::new_v4().to_string(),
            name,
        };
        self.store.insert(item).await
    }

    /// Get an item by ID.
    pub async fn get(&self, id: &str) -> Result<Item> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all items.
    pub async fn list(&self) -> Result<Vec<Item>> {
        self.store.list().await
    }

    /// Overwrite the name of an existing item. The ID is preserved.
    ///
    /// An unknown ID is `NotFound`; nothing is inserted.
    pub async fn update(&self, id: &str, name: String) -> Result<Item> {
        let item = Item {
            id: id.to_string(),
            name,
        };
        self.store.replace(id, item).await
    }

    /// Remove an item. Unknown IDs are a no-op.
    pub async fn delete(&self, id: &str) -> Result<DeleteOutcome> {
        let removed = self.store.remove(id).await?.is_some();
        Ok(DeleteOutcome {
            id: id.to_string(),
            removed,
        })
    }
}

fn not_found(id: &str) -> StoreError {
    StoreError::NotFound(format!("Item {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::collections::HashSet;

    fn ops() -> ItemOperations {
        ItemOperations::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_create_generates_id() {
        let ops = ops();
        let item = ops.create("Apples".to_string()).await.unwrap();

        assert!(!item.id.is_empty());
        assert!(uuid::Uuid::parse_str(&item.id).is_ok());
        assert_eq!(item.name, "Apples");
        assert_eq!(ops.list().await.unwrap(), vec![item]);
    }

    #[tokio::test]
    async fn test_created_ids_are_distinct() {
        let ops = ops();
        let mut ids = HashSet::new();
        for n in 0..200 {
            let item = ops.create(format!("item {}", n)).await.unwrap();
            assert!(ids.insert(item.id));
        }
        assert_eq!(ops.list().await.unwrap().len(), 200);
    }

    #[tokio::test]
    async fn test_get_round_trip() {
        let ops = ops();
        let created = ops.create("Apples".to_string()).await.unwrap();
        assert_eq!(ops.get(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let ops = ops();
        let err = ops.get("missing").await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("Item missing not found".to_string()));
    }

    #[tokio::test]
    async fn test_update_preserves_id() {
        let ops = ops();
        let created = ops.create("Apples".to_string()).await.unwrap();
        let other = ops.create("Bananas".to_string()).await.unwrap();

        let updated = ops
            .update(&created.id, "Apricots".to_string())
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Apricots");

        assert_eq!(ops.get(&created.id).await.unwrap().name, "Apricots");
        assert_eq!(ops.get(&other.id).await.unwrap(), other);
    }

    #[tokio::test]
    async fn test_update_missing_does_not_insert() {
        let ops = ops();
        ops.create("Apples".to_string()).await.unwrap();

        let err = ops
            .update("missing", "Ghost".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(ops.list().await.unwrap().len(), 1);
        assert!(ops.get("missing").await.is_err());
    }

    #[tokio::test]
    async fn test_delete_present_and_absent() {
        let ops = ops();
        let created = ops.create("Apples".to_string()).await.unwrap();

        let outcome = ops.delete(&created.id).await.unwrap();
        assert!(outcome.removed);
        assert_eq!(
            outcome.message(),
            format!("Item {} has been removed", created.id)
        );
        assert!(matches!(
            ops.get(&created.id).await,
            Err(StoreError::NotFound(_))
        ));

        let outcome = ops.delete(&created.id).await.unwrap();
        assert!(!outcome.removed);
        assert_eq!(
            outcome.message(),
            format!("Item {} has been removed", created.id)
        );
        assert!(ops.list().await.unwrap().is_empty());
    }
}
