//! Catalog bootstrap

use std::sync::Arc;

use tracing::info;

use crate::domain::team::{catalog, TeamRepository};
use crate::domain::DomainError;

/// Seeds the team catalog on startup.
///
/// A no-op when the catalog already holds at least one active team, so
/// repeated process starts never duplicate the reference data.
#[derive(Debug)]
pub struct CatalogSeeder<T: TeamRepository> {
    teams: Arc<T>,
}

impl<T: TeamRepository> CatalogSeeder<T> {
    pub fn new(teams: Arc<T>) -> Self {
        Self { teams }
    }

    /// Insert the seed catalog if the store is empty
    pub async fn seed_if_empty(&self) -> Result<(), DomainError> {
        if self.teams.count().await? > 0 {
            return Ok(());
        }

        let teams = catalog::seed_teams();
        let count = teams.len();
        self.teams.seed(teams).await?;

        info!(count, "Seeded team catalog");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::MockTeamRepository;

    #[tokio::test]
    async fn test_seeds_empty_catalog() {
        let repo = Arc::new(MockTeamRepository::new());
        let seeder = CatalogSeeder::new(Arc::clone(&repo));

        seeder.seed_if_empty().await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 32);
    }

    #[tokio::test]
    async fn test_reseed_is_a_noop() {
        let repo = Arc::new(MockTeamRepository::new());
        let seeder = CatalogSeeder::new(Arc::clone(&repo));

        seeder.seed_if_empty().await.unwrap();
        seeder.seed_if_empty().await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 32);
    }

    #[tokio::test]
    async fn test_nonempty_catalog_untouched() {
        let repo = Arc::new(MockTeamRepository::with_teams(vec![crate::domain::team::Team::new(
            "Porto",
            crate::domain::team::Country::from("Portugal"),
        )]));
        let seeder = CatalogSeeder::new(Arc::clone(&repo));

        seeder.seed_if_empty().await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
