//! Generic document storage abstraction with soft-delete semantics

mod entity;
mod repository;

pub use entity::{Document, DocumentId, RecordStatus};
pub use repository::DocumentStore;
