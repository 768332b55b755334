//! ItemStore trait definition.
//!
//! The trait abstracts the collection holding items, so operations and
//! handlers never touch the underlying container directly.

use async_trait::async_trait;

use crate::item::Item;

use super::error::Result;

/// Store trait for the item collection.
///
/// Implementations must keep ids unique and preserve insertion order.
/// Every method is atomic with respect to every other method.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// List all items in insertion order.
    ///
    /// The returned vector is a snapshot; later mutations are not visible through it.
    async fn list(&self) -> Result<Vec<Item>>;

    /// Get an item by ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<Item>>;

    /// Append an item. Fails with `Conflict` if the ID is already present.
    async fn insert(&self, item: Item) -> Result<Item>;

    /// Replace the item with the given ID, keeping its position.
    ///
    /// Fails with `NotFound` if no item has `id`, leaving the collection unchanged.
    async fn replace(&self, id: &str, item: Item) -> Result<Item>;

    /// Remove the item with the given ID.
    ///
    /// Returns the removed item, or `None` if nothing matched.
    async fn remove(&self, id: &str) -> Result<Option<Item>>;

    /// Number of items currently stored.
    async fn count(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }
}
