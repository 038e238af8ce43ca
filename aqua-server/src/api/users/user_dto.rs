use aqua_core::UserProfile;

use serde::Serialize;

/// User profile DTO for JSON serialization
///
/// The stored credential never appears here: responses built from this
/// type cannot leak it.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub sex: Option<String>,
    pub age: Option<i32>,
    pub weight_kg: Option<f64>,
    pub daily_goal_ml: i32,
    pub created_at: i64,
}

impl From<UserProfile> for UserDto {
    fn from(p: UserProfile) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            email: p.email,
            sex: p.sex,
            age: p.age,
            weight_kg: p.weight_kg,
            daily_goal_ml: p.daily_goal_ml,
            created_at: p.created_at.timestamp(),
        }
    }
}
