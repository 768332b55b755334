//! MemoryStore implementation - an ItemStore over a locked vector.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::item::Item;

use super::error::{Result, StoreError};
use super::traits::ItemStore;

/// In-memory item collection for the process lifetime.
///
/// A single `RwLock` guards the vector: reads clone a snapshot under the
/// shared lock, mutations run under the exclusive lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `items`.
    ///
    /// Fails with `Conflict` if two items share an ID.
    pub fn with_items(items: Vec<Item>) -> Result<Self> {
        let mut seeded: Vec<Item> = Vec::with_capacity(items.len());
        for item in items {
            if seeded.iter().any(|i| i.id == item.id) {
                return Err(StoreError::Conflict(format!(
                    "Item {} already exists",
                    item.id
                )));
            }
            seeded.push(item);
        }
        Ok(Self {
            items: RwLock::new(seeded),
        })
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|i| i.id == id).cloned())
    }

    async fn insert(&self, item: Item) -> Result<Item> {
        let mut items = self.items.write().await;
        if items.iter().any(|i| i.id == item.id) {
            return Err(StoreError::Conflict(format!(
                "Item {} already exists",
                item.id
            )));
        }
        items.push(item.clone());
        Ok(item)
    }

    async fn replace(&self, id: &str, item: Item) -> Result<Item> {
        let mut items = self.items.write().await;
        let pos = items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("Item {} not found", id)))?;

        // Renaming onto another stored item's ID would break uniqueness
        if item.id != id && items.iter().any(|i| i.id == item.id) {
            return Err(StoreError::Conflict(format!(
                "Item {} already exists",
                item.id
            )));
        }

        items[pos] = item.clone();
        Ok(item)
    }

    async fn remove(&self, id: &str) -> Result<Option<Item>> {
        let mut items = self.items.write().await;
        let pos = items.iter().position(|i| i.id == id);
        Ok(pos.map(|pos| items.remove(pos)))
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.items.read().await.len())
    }
}
