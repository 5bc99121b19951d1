//! Draw record repository trait

use async_trait::async_trait;

use super::entity::{DrawId, DrawRecord};
use crate::domain::DomainError;

/// Repository over persisted draw records
#[async_trait]
pub trait DrawRepository: Send + Sync + std::fmt::Debug {
    /// Persist a newly created record
    async fn create(&self, record: DrawRecord) -> Result<DrawRecord, DomainError>;

    /// Get an active record by id
    async fn get_by_id(&self, id: &DrawId) -> Result<Option<DrawRecord>, DomainError>;

    /// Get all active records, newest first by creation time
    async fn list_by_created_desc(&self) -> Result<Vec<DrawRecord>, DomainError>;

    /// Soft-delete a record, returns true if an active record was hit
    async fn soft_delete(&self, id: &DrawId) -> Result<bool, DomainError>;
}
