//! ItemStore abstraction for the items API.
//!
//! This module owns the authoritative item collection. Handlers never see
//! it directly; they go through [`crate::operations::ItemOperations`].
//!
//! # Architecture
//!
//! ```text
//! handlers.rs → ItemOperations → Arc<dyn ItemStore>
//!                                      ↓
//!                                MemoryStore (RwLock<Vec<Item>>)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use items_api::store::{ItemStore, MemoryStore};
//!
//! let store = Arc::new(MemoryStore::new());
//! store.insert(Item::new("a1", "Apples")).await?;
//! let items = store.list().await?;
//! ```

mod error;
mod memory_store;
mod traits;

pub use error::{Result, StoreError};
pub use memory_store::MemoryStore;
pub use traits::ItemStore;
