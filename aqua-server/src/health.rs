use crate::state::AppState;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /healthz - liveness plus a database ping
///
/// Plain-text body so probes can match on it directly: "ok" when the
/// database answers `SELECT 1`, "db_error" with a 500 otherwise.
pub async fn healthz(State(state): State<AppState>) -> Response {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (StatusCode::OK, "ok").into_response(),
        Err(e) => {
            log::error!("Health check database ping failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "db_error").into_response()
        }
    }
}
