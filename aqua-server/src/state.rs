use sqlx::SqlitePool;

/// Shared state handed to every handler via `Router::with_state`.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
