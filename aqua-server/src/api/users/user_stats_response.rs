use aqua_db::UserStats;

use serde::Serialize;

/// Aggregate statistics response
///
/// Averages are null while no user carries the underlying attribute.
#[derive(Debug, Serialize)]
pub struct UserStatsResponse {
    pub total_users: i64,
    pub avg_weight_kg: Option<f64>,
    pub avg_daily_goal_ml: Option<f64>,
}

impl From<UserStats> for UserStatsResponse {
    fn from(s: UserStats) -> Self {
        Self {
            total_users: s.total_users,
            avg_weight_kg: s.avg_weight_kg,
            avg_daily_goal_ml: s.avg_daily_goal_ml,
        }
    }
}
