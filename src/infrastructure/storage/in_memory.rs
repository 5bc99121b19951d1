//! In-memory document store
//!
//! Data is lost when the process terminates; the durable store behind the
//! same trait is an operational swap, not a code change.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::storage::{Document, DocumentId, DocumentStore, RecordStatus};
use crate::domain::DomainError;

/// Thread-safe in-memory document collection with soft-delete semantics
#[derive(Debug)]
pub struct InMemoryDocumentStore<D>
where
    D: Document,
{
    documents: RwLock<HashMap<String, D>>,
}

impl<D> Default for InMemoryDocumentStore<D>
where
    D: Document,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<D> InMemoryDocumentStore<D>
where
    D: Document,
{
    /// Creates a new empty store
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<D> DocumentStore<D> for InMemoryDocumentStore<D>
where
    D: Document,
{
    async fn insert(&self, document: D) -> Result<D, DomainError> {
        let key = document.id().as_str().to_string();
        let mut documents = self
            .documents
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if documents.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Document with id '{}' already exists",
                key
            )));
        }

        documents.insert(key, document.clone());
        Ok(document)
    }

    async fn find_by_id(&self, id: &D::Id) -> Result<Option<D>, DomainError> {
        let documents = self
            .documents
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(documents
            .get(id.as_str())
            .filter(|document| document.status().is_active())
            .cloned())
    }

    async fn find_active(&self) -> Result<Vec<D>, DomainError> {
        let documents = self
            .documents
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(documents
            .values()
            .filter(|document| document.status().is_active())
            .cloned()
            .collect())
    }

    async fn count_active(&self) -> Result<usize, DomainError> {
        let documents = self
            .documents
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(documents
            .values()
            .filter(|document| document.status().is_active())
            .count())
    }

    async fn soft_delete(&self, id: &D::Id) -> Result<bool, DomainError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        match documents
            .get_mut(id.as_str())
            .filter(|document| document.status().is_active())
        {
            Some(document) => {
                document.set_status(RecordStatus::Deleted);
                document.mark_updated();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
