use axum::{middleware, routing::get, Router};

use crate::handlers::{health, session};
use crate::middleware::require_session;
use crate::state::AppState;

/// Session routes. Routes under the guard see the verified claims as a
/// request extension.
pub fn build_router(state: AppState) -> Router {
    let guarded = Router::new()
        .route("/api/me", get(session::current_user))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/session", get(session::get_session).delete(session::logout))
        .merge(guarded)
        .with_state(state)
}
