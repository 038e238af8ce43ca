//! User profile REST API handlers
//!
//! Registration plus the admin surface: paginated search, aggregate
//! stats, single-profile fetch, partial update and delete. Partial
//! updates go through [`aqua_core::reconcile`] so the stored daily goal
//! always matches the stored weight.

use crate::{
    ApiError, ApiResult, DeleteResponse, ListUsersQuery, RegisterRequest, UserDto,
    UserListResponse, UserResponse, UserStatsResponse,
};
use crate::state::AppState;

use aqua_core::{ErrorLocation, ProfilePatch, UserProfile, reconcile};
use aqua_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/register
///
/// Register a new user profile. The daily goal is computed from the
/// submitted weight (2000 ml when absent or non-positive).
pub async fn register_user(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    require_field(&req.name, "name")?;
    require_field(&req.email, "email")?;
    require_field(&req.password, "password")?;

    let profile = UserProfile::new(
        req.name,
        req.email,
        req.password,
        req.sex,
        req.age,
        req.weight_kg,
    );

    let repo = UserRepository::new(state.pool.clone());
    repo.create(&profile).await?;

    log::info!(
        "Registered user {} (daily goal {} ml)",
        profile.id,
        profile.daily_goal_ml
    );

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            user: profile.into(),
        }),
    ))
}

/// GET /api/admin/users
///
/// Paginated user listing with optional name/email search
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> ApiResult<Json<UserListResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let page = repo.search(&query.into_search()).await?;

    Ok(Json(UserListResponse {
        total: page.total,
        users: page.items.into_iter().map(UserDto::from).collect(),
    }))
}

/// GET /api/admin/users/stats
///
/// Aggregate statistics across all users
pub async fn user_stats(State(state): State<AppState>) -> ApiResult<Json<UserStatsResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let stats = repo.stats().await?;

    Ok(Json(stats.into()))
}

/// GET /api/admin/users/{id}
///
/// Get a single user profile by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = Uuid::parse_str(&id)?;

    let repo = UserRepository::new(state.pool.clone());
    let profile = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse {
        user: profile.into(),
    }))
}

/// PATCH /api/admin/users/{id}
///
/// Apply a partial update. Present fields are written verbatim
/// (explicit nulls clear); the daily goal is recomputed whenever a
/// demographic field appears in the patch. An empty patch returns the
/// stored profile unchanged.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProfilePatch>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = Uuid::parse_str(&id)?;

    let repo = UserRepository::new(state.pool.clone());
    let current = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let reconciled = reconcile(&current, &patch);
    if reconciled.changes.is_empty() {
        return Ok(Json(UserResponse {
            user: current.into(),
        }));
    }

    repo.update_fields(user_id, &reconciled.changes).await?;

    let updated = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::Internal {
            message: format!("User {} row missing after update", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::info!(
        "Updated user {} (goal recomputed: {})",
        user_id,
        reconciled.recompute_goal
    );

    Ok(Json(UserResponse {
        user: updated.into(),
    }))
}

/// DELETE /api/admin/users/{id}
///
/// Hard-delete a user profile
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let user_id = Uuid::parse_str(&id)?;

    let repo = UserRepository::new(state.pool.clone());
    repo.delete(user_id).await?;

    log::info!("Deleted user {}", user_id);

    Ok(Json(DeleteResponse {
        deleted_id: user_id.to_string(),
    }))
}

// =============================================================================
// Validation
// =============================================================================

/// Reject blank (empty or whitespace-only) required fields.
#[track_caller]
fn require_field(value: &str, field: &'static str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation {
            message: format!("{} must not be blank", field),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
