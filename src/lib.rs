//! World League API
//!
//! Draws competing teams into balanced groups such that no group contains
//! two teams from the same country, records the outcome and serves it over
//! HTTP:
//! - randomized draw engine with an injectable random source
//! - validation with stable, user-facing rejection keys
//! - soft-deleting document store behind a generic trait
//! - JWT-authenticated endpoints for performing and browsing draws

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::draw::{DrawRecord, DrawSettings};
use domain::team::Team;
use domain::user::User;
use domain::DomainError;
use infrastructure::auth::{JwtConfig, JwtService};
use infrastructure::draw::{DrawService, StoreDrawRepository};
use infrastructure::storage::InMemoryDocumentStore;
use infrastructure::team::{CatalogSeeder, StoreTeamRepository};
use infrastructure::user::{Argon2Hasher, StoreUserRepository, UserService};

/// Build the application state and bootstrap the team catalog.
///
/// Seeding is idempotent: an already-populated catalog is left untouched.
pub async fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let team_store = Arc::new(InMemoryDocumentStore::<Team>::new());
    let draw_store = Arc::new(InMemoryDocumentStore::<DrawRecord>::new());
    let user_store = Arc::new(InMemoryDocumentStore::<User>::new());

    let team_repository = Arc::new(StoreTeamRepository::new(team_store));
    let draw_repository = Arc::new(StoreDrawRepository::new(draw_store));
    let user_repository = Arc::new(StoreUserRepository::new(user_store));

    CatalogSeeder::new(Arc::clone(&team_repository))
        .seed_if_empty()
        .await?;

    let draw_service = Arc::new(DrawService::new(
        draw_repository,
        team_repository,
        DrawSettings::standard(),
    ));
    let user_service = Arc::new(UserService::new(
        user_repository,
        Arc::new(Argon2Hasher::new()),
    ));
    let jwt_service = Arc::new(JwtService::new(JwtConfig::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_expiration_hours,
    )));

    Ok(AppState {
        draw_service,
        user_service,
        jwt_service,
    })
}
