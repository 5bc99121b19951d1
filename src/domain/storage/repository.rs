//! Document store trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::Document;

/// Generic store for document collections.
///
/// All read operations implicitly filter out soft-deleted records;
/// `soft_delete` flips the status flag in place instead of removing
/// the document.
#[async_trait]
pub trait DocumentStore<D>: Send + Sync + Debug
where
    D: Document,
{
    /// Inserts a new document, returns an error if the id already exists
    async fn insert(&self, document: D) -> Result<D, DomainError>;

    /// Inserts a batch of documents
    async fn insert_many(&self, documents: Vec<D>) -> Result<(), DomainError> {
        for document in documents {
            self.insert(document).await?;
        }
        Ok(())
    }

    /// Retrieves an active document by its id
    async fn find_by_id(&self, id: &D::Id) -> Result<Option<D>, DomainError>;

    /// Retrieves all active documents
    async fn find_active(&self) -> Result<Vec<D>, DomainError>;

    /// Retrieves all active documents, newest first by creation time
    async fn find_active_by_created_desc(&self) -> Result<Vec<D>, DomainError> {
        let mut documents = self.find_active().await?;
        documents.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(documents)
    }

    /// Returns the count of active documents
    async fn count_active(&self) -> Result<usize, DomainError> {
        Ok(self.find_active().await?.len())
    }

    /// Marks an active document as deleted, returns true if one was hit
    async fn soft_delete(&self, id: &D::Id) -> Result<bool, DomainError>;
}
