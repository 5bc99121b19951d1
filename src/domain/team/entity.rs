//! Team entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::storage::{Document, DocumentId, RecordStatus};

/// Team identifier, a UUID assigned at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl DocumentId for TeamId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Country code a team competes under.
///
/// Free-text, compared verbatim; the draw constraint only needs equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Country(String);

impl Country {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Country {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

/// Team entity.
///
/// Immutable reference data created at catalog-seed time; never mutated
/// afterwards, logically deleted via the status flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    country: Country,
    status: RecordStatus,
    created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl Team {
    /// Create a new team
    pub fn new(name: impl Into<String>, country: Country) -> Self {
        Self {
            id: TeamId::generate(),
            name: name.into(),
            country,
            status: RecordStatus::Active,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &Country {
        &self.country
    }
}

impl Document for Team {
    type Id = TeamId;

    fn id(&self) -> &TeamId {
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
