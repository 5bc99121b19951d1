//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::storage::{Document, DocumentId, RecordStatus};

/// User identifier, a UUID assigned at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse an identifier from its string form
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(|id| Self(id.to_string()))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl DocumentId for UserId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: String,
    /// Argon2 password hash, never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    first_name: String,
    last_name: String,
    role: String,
    status: RecordStatus,
    created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Role assigned to self-registered accounts
    pub const DEFAULT_ROLE: &'static str = "User";

    /// Create a new user with the default role
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::generate(),
            email: email.into(),
            password_hash: password_hash.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: Self::DEFAULT_ROLE.to_string(),
            status: RecordStatus::Active,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Document for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn set_status(&mut self, status: RecordStatus) {
        self.status = status;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn mark_updated(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("john@example.com", "hash", "John", "Doe");

        assert_eq!(user.email(), "john@example.com");
        assert_eq!(user.first_name(), "John");
        assert_eq!(user.last_name(), "Doe");
        assert_eq!(user.role(), User::DEFAULT_ROLE);
        assert!(user.is_active());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new("john@example.com", "secret-hash", "John", "Doe");
        let json = serde_json::to_string(&user).unwrap();

        assert!(!json.contains("secret-hash"));
    }

    #[test]
    fn test_user_id_parse_round_trip() {
        let id = UserId::generate();
        assert_eq!(UserId::parse(id.as_str()), Some(id));
    }
}
