#![allow(dead_code)]

//! Test infrastructure for aqua-server API tests

use aqua_server::state::AppState;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/aqua-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Insert a user row directly, with the stored goal under test control
pub async fn create_test_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    weight_kg: Option<f64>,
    daily_goal_ml: i32,
) -> Uuid {
    let user_id = Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
            INSERT INTO users (id, name, email, password, sex, age, weight_kg,
                daily_goal_ml, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id.to_string())
    .bind(name)
    .bind(email)
    .bind("secret")
    .bind("f")
    .bind(30)
    .bind(weight_kg)
    .bind(daily_goal_ml)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test user");

    user_id
}
