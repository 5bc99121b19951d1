//! Document-store-backed draw repository

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::draw::{DrawId, DrawRecord, DrawRepository};
use crate::domain::storage::DocumentStore;
use crate::domain::DomainError;

/// Draw repository over a document store collection
#[derive(Debug)]
pub struct StoreDrawRepository<S: DocumentStore<DrawRecord>> {
    store: Arc<S>,
}

impl<S: DocumentStore<DrawRecord>> StoreDrawRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: DocumentStore<DrawRecord>> DrawRepository for StoreDrawRepository<S> {
    async fn create(&self, record: DrawRecord) -> Result<DrawRecord, DomainError> {
        self.store.insert(record).await
    }

    async fn get_by_id(&self, id: &DrawId) -> Result<Option<DrawRecord>, DomainError> {
        self.store.find_by_id(id).await
    }

    async fn list_by_created_desc(&self) -> Result<Vec<DrawRecord>, DomainError> {
        self.store.find_active_by_created_desc().await
    }

    async fn soft_delete(&self, id: &DrawId) -> Result<bool, DomainError> {
        self.store.soft_delete(id).await
    }
}
