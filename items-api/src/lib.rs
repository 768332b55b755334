pub mod audit;
pub mod item;
pub mod operations;
pub mod rest;
pub mod seed;
pub mod store;
pub mod validation;

pub use audit::{ApiAuditLogger, create_audit_logger};
pub use item::Item;
pub use operations::{DeleteOutcome, ItemOperations};
pub use store::{ItemStore, MemoryStore, StoreError};
pub use validation::{ItemPayload, ValidationError};
