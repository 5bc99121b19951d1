//! Team repository trait

use async_trait::async_trait;

use super::entity::Team;
use crate::domain::DomainError;

/// Repository over the team catalog
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Get all active teams
    async fn list_active(&self) -> Result<Vec<Team>, DomainError>;

    /// Count active teams
    async fn count(&self) -> Result<usize, DomainError>;

    /// Insert a batch of teams (catalog bootstrap)
    async fn seed(&self, teams: Vec<Team>) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::RwLock;

    use super::*;

    /// Mock implementation for testing
    #[derive(Debug, Default)]
    pub struct MockTeamRepository {
        teams: RwLock<Vec<Team>>,
        error: Option<String>,
    }

    impl MockTeamRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_teams(teams: Vec<Team>) -> Self {
            Self {
                teams: RwLock::new(teams),
                error: None,
            }
        }

        pub fn with_error(error: impl Into<String>) -> Self {
            Self {
                teams: RwLock::new(Vec::new()),
                error: Some(error.into()),
            }
        }

        fn check_error(&self) -> Result<(), DomainError> {
            match &self.error {
                Some(message) => Err(DomainError::storage(message.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl TeamRepository for MockTeamRepository {
        async fn list_active(&self) -> Result<Vec<Team>, DomainError> {
            self.check_error()?;
            Ok(self.teams.read().unwrap().clone())
        }

        async fn count(&self) -> Result<usize, DomainError> {
            self.check_error()?;
            Ok(self.teams.read().unwrap().len())
        }

        async fn seed(&self, teams: Vec<Team>) -> Result<(), DomainError> {
            self.check_error()?;
            self.teams.write().unwrap().extend(teams);
            Ok(())
        }
    }
}
