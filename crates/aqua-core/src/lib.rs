pub mod error;
pub mod goal;
pub mod models;
pub mod reconcile;

#[cfg(test)]
mod tests;

pub use error::ErrorLocation;
pub use goal::{DEFAULT_DAILY_GOAL_ML, daily_goal_ml};
pub use models::user_profile::UserProfile;
pub use reconcile::{ProfileChanges, ProfilePatch, Reconciled, reconcile};
