//! User profile entity - account identity plus hydration attributes.

use crate::goal::daily_goal_ml;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user together with the attributes the daily hydration
/// goal is derived from.
///
/// Deliberately not serializable: `password` is the stored credential
/// and must never leave the backend. API responses go through a DTO
/// that omits it.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub sex: Option<String>,
    pub age: Option<i32>,
    pub weight_kg: Option<f64>,
    /// Always derived from `weight_kg`, never stored independently.
    pub daily_goal_ml: i32,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a new profile with a freshly computed daily goal.
    pub fn new(
        name: String,
        email: String,
        password: String,
        sex: Option<String>,
        age: Option<i32>,
        weight_kg: Option<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password,
            sex,
            age,
            weight_kg,
            daily_goal_ml: daily_goal_ml(weight_kg),
            created_at: Utc::now(),
        }
    }
}
