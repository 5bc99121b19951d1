//! User repository trait

use async_trait::async_trait;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository over registered users
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    /// Persist a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Get an active user by id
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Get an active user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
}
