//! Daily hydration goal calculation.

/// Goal assigned when no usable body weight is known.
pub const DEFAULT_DAILY_GOAL_ML: i32 = 2000;

/// Milliliters of water per kilogram of body weight.
const ML_PER_KG: f64 = 35.0;

/// Compute the daily hydration goal in milliliters.
///
/// A missing, non-finite or non-positive weight yields
/// [`DEFAULT_DAILY_GOAL_ML`]. Otherwise the goal is `weight_kg * 35`
/// rounded to the nearest whole milliliter, ties away from zero.
pub fn daily_goal_ml(weight_kg: Option<f64>) -> i32 {
    match weight_kg {
        Some(kg) if kg.is_finite() && kg > 0.0 => (kg * ML_PER_KG).round() as i32,
        _ => DEFAULT_DAILY_GOAL_ML,
    }
}
