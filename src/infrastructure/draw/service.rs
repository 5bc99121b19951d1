//! Draw service: validation, engine invocation, persistence and the
//! public response view

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::domain::draw::{
    validate_pool, validate_request, DrawEngine, DrawError, DrawId, DrawRecord, DrawRepository,
    DrawRequest, DrawSettings, Group,
};
use crate::domain::team::TeamRepository;

/// Public view of a team inside a draw response.
///
/// Country is deliberately absent: it is retained in storage but stripped
/// from the externally visible shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamView {
    pub name: String,
}

/// Public view of one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    pub name: String,
    pub teams: Vec<TeamView>,
}

impl From<&Group> for GroupView {
    fn from(group: &Group) -> Self {
        Self {
            name: group.name().to_string(),
            teams: group
                .teams()
                .iter()
                .map(|team| TeamView {
                    name: team.name().to_string(),
                })
                .collect(),
        }
    }
}

/// Public view of a persisted draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawResponse {
    pub id: String,
    pub drawer_first_name: String,
    pub drawer_last_name: String,
    pub group_count: usize,
    pub created_at: DateTime<Utc>,
    pub groups: Vec<GroupView>,
}

impl From<&DrawRecord> for DrawResponse {
    fn from(record: &DrawRecord) -> Self {
        Self {
            id: record.id().to_string(),
            drawer_first_name: record.drawer_first_name().to_string(),
            drawer_last_name: record.drawer_last_name().to_string(),
            group_count: record.group_count(),
            created_at: record.created_at(),
            groups: record.groups().iter().map(GroupView::from).collect(),
        }
    }
}

/// Orchestrates a draw: validate, read the catalog snapshot, run the
/// engine, persist the record and map it to the response view.
///
/// Owns no state of its own; each call works on its own pool snapshot, so
/// concurrent draws are safe without locking.
#[derive(Debug)]
pub struct DrawService<D: DrawRepository, T: TeamRepository> {
    draws: Arc<D>,
    teams: Arc<T>,
    engine: DrawEngine,
    settings: DrawSettings,
}

impl<D: DrawRepository, T: TeamRepository> DrawService<D, T> {
    pub fn new(draws: Arc<D>, teams: Arc<T>, settings: DrawSettings) -> Self {
        Self {
            draws,
            teams,
            engine: DrawEngine::new(settings),
            settings,
        }
    }

    /// Perform a draw and persist its record.
    ///
    /// Exactly two store operations: the catalog read and the single record
    /// insert; the record is fully constructed in memory in between.
    pub async fn perform_draw(&self, request: DrawRequest) -> Result<DrawResponse, DrawError> {
        validate_request(&request, &self.settings)?;

        let teams = self.teams.list_active().await?;
        validate_pool(&teams, request.group_count)?;

        let groups = self
            .engine
            .execute(&mut rand::thread_rng(), &teams, request.group_count)?;

        let record = DrawRecord::new(
            request.first_name,
            request.last_name,
            request.group_count,
            groups,
        );
        let record = self.draws.create(record).await?;

        info!(
            draw_id = %record.id(),
            group_count = record.group_count(),
            teams = teams.len(),
            "Draw completed"
        );

        Ok(DrawResponse::from(&record))
    }

    /// Fetch one draw by its identifier
    pub async fn get_draw(&self, id: &str) -> Result<DrawResponse, DrawError> {
        let draw_id = DrawId::parse(id).ok_or_else(|| DrawError::not_found(id))?;

        let record = self
            .draws
            .get_by_id(&draw_id)
            .await?
            .ok_or_else(|| DrawError::not_found(id))?;

        Ok(DrawResponse::from(&record))
    }

    /// List all draws, newest first, soft-deleted excluded
    pub async fn list_draws(&self) -> Result<Vec<DrawResponse>, DrawError> {
        let records = self.draws.list_by_created_desc().await?;
        Ok(records.iter().map(DrawResponse::from).collect())
    }

    /// Soft-delete a draw (administrative path)
    pub async fn delete_draw(&self, id: &str) -> Result<(), DrawError> {
        let draw_id = DrawId::parse(id).ok_or_else(|| DrawError::not_found(id))?;

        if !self.draws.soft_delete(&draw_id).await? {
            return Err(DrawError::not_found(id));
        }

        info!(draw_id = id, "Draw soft-deleted");
        Ok(())
    }
}
