//! Document-store-backed team repository

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::storage::DocumentStore;
use crate::domain::team::{Team, TeamRepository};
use crate::domain::DomainError;

/// Team repository over a document store collection
#[derive(Debug)]
pub struct StoreTeamRepository<S: DocumentStore<Team>> {
    store: Arc<S>,
}

impl<S: DocumentStore<Team>> StoreTeamRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: DocumentStore<Team>> TeamRepository for StoreTeamRepository<S> {
    async fn list_active(&self) -> Result<Vec<Team>, DomainError> {
        self.store.find_active().await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        self.store.count_active().await
    }

    async fn seed(&self, teams: Vec<Team>) -> Result<(), DomainError> {
        self.store.insert_many(teams).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::Country;
    use crate::infrastructure::storage::InMemoryDocumentStore;

    fn repository() -> StoreTeamRepository<InMemoryDocumentStore<Team>> {
        StoreTeamRepository::new(Arc::new(InMemoryDocumentStore::new()))
    }

    #[tokio::test]
    async fn test_seed_and_list() {
        let repo = repository();

        repo.seed(vec![
            Team::new("Madrid", Country::from("Spain")),
            Team::new("Seville", Country::from("Spain")),
        ])
        .await
        .unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);

        let mut names: Vec<String> = repo
            .list_active()
            .await
            .unwrap()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["Madrid", "Seville"]);
    }
}
