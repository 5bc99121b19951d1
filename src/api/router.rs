use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::auth;
use super::draws;
use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;

/// Create the application router.
///
/// Auth routes sit behind a per-IP rate limit; draw routes authenticate
/// through the `RequireUser` extractor.
pub fn create_router(state: AppState) -> Router {
    // Rate limiting on credential endpoints: ~10 requests/minute per IP
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(6)
        .burst_size(10)
        .finish()
        .unwrap();

    let auth_routes = auth::create_auth_router().layer(GovernorLayer::new(Arc::new(governor_conf)));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/auth", auth_routes)
        .nest("/draws", draws::create_draw_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
