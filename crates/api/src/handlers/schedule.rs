//! Handlers for the `/schedules` resource (weekly schedules).
//!
//! Reads are open to any authenticated user; mutations are admin-only and
//! recorded in the activity log.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use washline_core::activity::activity_types;
use washline_core::error::CoreError;
use washline_core::types::DbId;
use washline_db::models::schedule::{CreateWeeklySchedule, UpdateWeeklySchedule, WeeklySchedule};

use super::{parse_time, validate_day};
use crate::activity;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Fallback daily capacity when a create request omits it.
const DEFAULT_MAX_BATCHES_PER_DAY: i32 = 50;

// ---------------------------------------------------------------------------
// Request / query types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /schedules`.
#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    pub block: Option<String>,
    pub floor: Option<i32>,
}

/// Request body for `POST /schedules`. Times accept `HH:MM` or `HH:MM:SS`.
#[derive(Debug, Deserialize)]
pub struct CreateScheduleRequest {
    pub block: String,
    pub floor_number: i32,
    pub scheduled_day: String,
    pub pickup_time: String,
    pub dropoff_start_time: String,
    pub dropoff_end_time: String,
    pub max_batches_per_day: Option<i32>,
}

/// Request body for `PUT /schedules/{id}`. All fields optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateScheduleRequest {
    pub scheduled_day: Option<String>,
    pub pickup_time: Option<String>,
    pub dropoff_start_time: Option<String>,
    pub dropoff_end_time: Option<String>,
    pub max_batches_per_day: Option<i32>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/schedules
///
/// List weekly schedules. With both `block` and `floor` query parameters,
/// returns only that pair's rows.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ScheduleQuery>,
) -> AppResult<Json<Vec<WeeklySchedule>>> {
    let schedules = match (params.block, params.floor) {
        (Some(block), Some(floor)) => state.store.schedules_for(&block, floor).await?,
        _ => state.store.list_schedules().await?,
    };
    Ok(Json(schedules))
}

/// POST /api/v1/schedules
///
/// Create a weekly schedule (admin only).
pub async fn create(
    RequireAdmin(auth): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateScheduleRequest>,
) -> AppResult<(StatusCode, Json<WeeklySchedule>)> {
    validate_day(&input.scheduled_day)?;
    if input.block.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "block is required".into(),
        )));
    }

    let schedule = state
        .store
        .create_schedule(&CreateWeeklySchedule {
            block: input.block.trim().to_string(),
            floor_number: input.floor_number,
            scheduled_day: input.scheduled_day,
            pickup_time: parse_time("pickup_time", &input.pickup_time)?,
            dropoff_start_time: parse_time("dropoff_start_time", &input.dropoff_start_time)?,
            dropoff_end_time: parse_time("dropoff_end_time", &input.dropoff_end_time)?,
            max_batches_per_day: input.max_batches_per_day.unwrap_or(DEFAULT_MAX_BATCHES_PER_DAY),
            created_by: Some(auth.user_id),
        })
        .await?;

    activity::record(
        state.store.as_ref(),
        Some(auth.user_id),
        activity_types::SCHEDULE_UPDATE,
        format!(
            "Weekly schedule created for block {} floor {} ({})",
            schedule.block, schedule.floor_number, schedule.scheduled_day
        ),
        Some(serde_json::json!({ "schedule_id": schedule.id })),
    )
    .await;

    Ok((StatusCode::CREATED, Json(schedule)))
}

/// PUT /api/v1/schedules/{id}
///
/// Update a weekly schedule (admin only). Only supplied fields change;
/// toggling `is_active` through this endpoint is equivalent to the
/// dedicated toggle.
pub async fn update(
    RequireAdmin(auth): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateScheduleRequest>,
) -> AppResult<Json<WeeklySchedule>> {
    if let Some(day) = &input.scheduled_day {
        validate_day(day)?;
    }

    let update = UpdateWeeklySchedule {
        scheduled_day: input.scheduled_day,
        pickup_time: input
            .pickup_time
            .as_deref()
            .map(|t| parse_time("pickup_time", t))
            .transpose()?,
        dropoff_start_time: input
            .dropoff_start_time
            .as_deref()
            .map(|t| parse_time("dropoff_start_time", t))
            .transpose()?,
        dropoff_end_time: input
            .dropoff_end_time
            .as_deref()
            .map(|t| parse_time("dropoff_end_time", t))
            .transpose()?,
        max_batches_per_day: input.max_batches_per_day,
        is_active: input.is_active,
        updated_by: Some(auth.user_id),
    };

    let schedule = state
        .store
        .update_schedule(id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Schedule",
            id,
        }))?;

    activity::record(
        state.store.as_ref(),
        Some(auth.user_id),
        activity_types::SCHEDULE_UPDATE,
        format!(
            "Weekly schedule {} updated (block {} floor {})",
            schedule.id, schedule.block, schedule.floor_number
        ),
        Some(serde_json::json!({ "schedule_id": schedule.id })),
    )
    .await;

    Ok(Json(schedule))
}

/// DELETE /api/v1/schedules/{id}
///
/// Delete a weekly schedule (admin only). Returns 204 No Content.
pub async fn delete(
    RequireAdmin(auth): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = state.store.delete_schedule(id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Schedule",
            id,
        }));
    }

    activity::record(
        state.store.as_ref(),
        Some(auth.user_id),
        activity_types::SCHEDULE_UPDATE,
        format!("Weekly schedule {id} deleted"),
        None,
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}
