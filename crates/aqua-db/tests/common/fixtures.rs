#![allow(dead_code)]

use aqua_core::UserProfile;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates a test UserProfile with sensible defaults
pub fn create_test_profile(email: &str, weight_kg: Option<f64>) -> UserProfile {
    UserProfile::new(
        "Test User".to_string(),
        email.to_string(),
        "secret".to_string(),
        Some("f".to_string()),
        Some(30),
        weight_kg,
    )
}

/// Backdates a stored profile for ordering tests
/// (repository inserts always stamp "now")
pub async fn set_created_at(pool: &SqlitePool, id: Uuid, created_at: i64) {
    sqlx::query("UPDATE users SET created_at = ? WHERE id = ?")
        .bind(created_at)
        .bind(id.to_string())
        .execute(pool)
        .await
        .expect("Failed to set created_at");
}
