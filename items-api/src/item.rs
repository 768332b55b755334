//! Item domain type.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An item held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Server-generated opaque identifier (UUID v4)
    pub id: String,
    /// Free-form item name
    pub name: String,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
