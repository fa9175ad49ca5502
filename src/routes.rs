// Request-target constants - single source of truth for the probe surface

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::probe_handler;
use crate::state::AppState;

pub const ROOT: &str = "/";
/// Bare target without a leading slash, only sent by raw probe clients.
pub const HEALTH: &str = "health";
pub const HEALTH_CHECK: &str = "/health_check";

pub const PROBE_PATHS: [&str; 3] = [ROOT, HEALTH, HEALTH_CHECK];

/// Build the application router.
///
/// Every request lands in the fallback so that targets which are not valid
/// route patterns (such as `health`) still reach the probe policy.
pub fn router(state: AppState) -> Router {
    Router::new()
        .fallback(probe_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
