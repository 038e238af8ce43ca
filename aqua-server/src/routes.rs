use crate::api::users::users::{
    delete_user, get_user, list_users, register_user, update_user, user_stats,
};
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
///
/// `/api/admin/users/stats` is registered as a static route, so it wins
/// over the `{id}` capture and a user can never be looked up as "stats".
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/healthz", get(health::healthz))
        // Registration
        .route("/api/register", post(register_user))
        // Admin endpoints
        .route("/api/admin/users", get(list_users))
        .route("/api/admin/users/stats", get(user_stats))
        .route(
            "/api/admin/users/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
