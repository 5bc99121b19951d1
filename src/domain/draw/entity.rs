//! Draw record entity and the group/team shapes it persists

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::storage::{Document, DocumentId, RecordStatus};
use crate::domain::team::{Country, Team};

/// Draw record identifier, a UUID assigned at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawId(String);

impl DrawId {
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

impl std::fmt::Display for DrawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl DocumentId for DrawId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// A team as captured inside a draw record.
///
/// Country is retained in storage even though the public response view
/// strips it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTeam {
    name: String,
    country: Country,
}

impl GroupTeam {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &Country {
        &self.country
    }
}

impl From<&Team> for GroupTeam {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name().to_string(),
            country: team.country().clone(),
        }
    }
}

/// A named group of teams within one draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    name: String,
    teams: Vec<GroupTeam>,
}

impl Group {
    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            teams: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn teams(&self) -> &[GroupTeam] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Check whether the group already holds a team from `country`
    pub fn contains_country(&self, country: &Country) -> bool {
        self.teams.iter().any(|team| team.country() == country)
    }

    /// Add a team to the group
    pub fn push(&mut self, team: GroupTeam) {
        self.teams.push(team);
    }
}

/// Persisted outcome of one draw.
///
/// Immutable once created; only the status flag and update timestamp may
/// change (soft delete).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawRecord {
    id: DrawId,
    drawer_first_name: String,
    drawer_last_name: String,
    group_count: usize,
    groups: Vec<Group>,
    status: RecordStatus,
    created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl DrawRecord {
    /// Create a new record from the engine's output and request metadata
    pub fn new(
        drawer_first_name: impl Into<String>,
        drawer_last_name: impl Into<String>,
        group_count: usize,
        groups: Vec<Group>,
    ) -> Self {
        Self {
            id: DrawId::generate(),
            drawer_first_name: drawer_first_name.into(),
            drawer_last_name: drawer_last_name.into(),
            group_count,
            groups,
            status: RecordStatus::Active,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn id(&self) -> &DrawId {
        &self.id
    }

    pub fn drawer_first_name(&self) -> &str {
        &self.drawer_first_name
    }

    pub fn drawer_last_name(&self) -> &str {
        &self.drawer_last_name
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Document for DrawRecord {
    type Id = DrawId;

    fn id(&self) -> &DrawId {
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
