//! Document-store-backed user repository

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::storage::DocumentStore;
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// User repository over a document store collection
#[derive(Debug)]
pub struct StoreUserRepository<S: DocumentStore<User>> {
    store: Arc<S>,
}

impl<S: DocumentStore<User>> StoreUserRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: DocumentStore<User>> UserRepository for StoreUserRepository<S> {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.store.insert(user).await
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.store.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.store.find_active().await?;
        Ok(users.into_iter().find(|user| user.email() == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryDocumentStore;

    fn repository() -> StoreUserRepository<InMemoryDocumentStore<User>> {
        StoreUserRepository::new(Arc::new(InMemoryDocumentStore::new()))
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let repo = repository();

        let user = repo
            .create(User::new("john@example.com", "hash", "John", "Doe"))
            .await
            .unwrap();

        let by_email = repo.find_by_email("john@example.com").await.unwrap();
        assert_eq!(by_email.unwrap().id(), user.id());

        let by_id = repo.find_by_id(user.id()).await.unwrap();
        assert!(by_id.is_some());
    }

    #[tokio::test]
    async fn test_find_unknown_email() {
        let repo = repository();

        let found = repo.find_by_email("nobody@example.com").await.unwrap();
        assert!(found.is_none());
    }
}
