//! Handlers for the `/profile` resource.

use axum::extract::State;
use axum::Json;
use washline_core::error::CoreError;
use washline_db::models::user::{UpdateProfile, UserResponse};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/profile
///
/// Return the authenticated user's profile.
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .store
        .user_by_id(auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;
    Ok(Json(user.into()))
}

/// PUT /api/v1/profile
///
/// Update the authenticated user's profile. Only supplied fields change;
/// the role is fixed at signup and cannot be updated here.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .store
        .update_profile(auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;
    Ok(Json(user.into()))
}
