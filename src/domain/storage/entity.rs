//! Document and key traits shared by all persisted entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Logical visibility of a stored record.
///
/// Records are never physically removed through the normal write path;
/// deletion flips the status to `Deleted` and all standard reads filter
/// to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    #[default]
    Active,
    Deleted,
}

impl RecordStatus {
    /// Check if the record is visible to standard reads
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Deleted => write!(f, "deleted"),
        }
    }
}

/// Trait for document identifier types
pub trait DocumentId: Clone + Send + Sync + std::fmt::Debug + Eq + std::hash::Hash {
    /// Get the string representation of the identifier
    fn as_str(&self) -> &str;
}

/// Trait for entities persisted in a document collection.
///
/// Every document carries an identifier, a soft-delete status and
/// creation/update timestamps, mirroring the common base shape the
/// store expects.
pub trait Document: Clone + Send + Sync + std::fmt::Debug + 'static {
    type Id: DocumentId;

    /// Get the document's identifier
    fn id(&self) -> &Self::Id;

    /// Get the document's visibility status
    fn status(&self) -> RecordStatus;

    /// Set the document's visibility status
    fn set_status(&mut self, status: RecordStatus);

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Record an update timestamp
    fn mark_updated(&mut self);
}
