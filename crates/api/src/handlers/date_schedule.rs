//! Handlers for the `/date-schedules` resource.
//!
//! Date schedules override the weekly pattern for one (block, floor) on a
//! specific calendar date, and can mark that date as a holiday.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use washline_core::activity::activity_types;
use washline_core::error::CoreError;
use washline_core::types::DbId;
use washline_db::models::date_schedule::{CreateDateSchedule, DateSchedule, UpdateDateSchedule};

use super::parse_time;
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

/// Query parameters for `GET /date-schedules`.
#[derive(Debug, Deserialize)]
pub struct DateScheduleQuery {
    /// When `true`, only today's and future dates are returned.
    pub upcoming: Option<bool>,
}

/// Request body for `POST /date-schedules`.
#[derive(Debug, Deserialize)]
pub struct CreateDateScheduleRequest {
    pub block: String,
    pub floor_number: i32,
    pub schedule_date: NaiveDate,
    pub pickup_time: String,
    pub dropoff_start_time: String,
    pub dropoff_end_time: String,
    pub is_holiday: Option<bool>,
    pub holiday_name: Option<String>,
    pub max_batches_per_day: Option<i32>,
    pub notes: Option<String>,
}

/// Request body for `PUT /date-schedules/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateDateScheduleRequest {
    pub schedule_date: Option<NaiveDate>,
    pub pickup_time: Option<String>,
    pub dropoff_start_time: Option<String>,
    pub dropoff_end_time: Option<String>,
    pub is_active: Option<bool>,
    pub is_holiday: Option<bool>,
    pub holiday_name: Option<String>,
    pub max_batches_per_day: Option<i32>,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/date-schedules
///
/// List date schedules, optionally restricted to upcoming dates.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<DateScheduleQuery>,
) -> AppResult<Json<Vec<DateSchedule>>> {
    let from = params
        .upcoming
        .unwrap_or(false)
        .then(|| chrono::Utc::now().date_naive());
    let schedules = state.store.list_date_schedules(from).await?;
    Ok(Json(schedules))
}

/// POST /api/v1/date-schedules
///
/// Create a date-specific schedule (admin only).
pub async fn create(
    RequireAdmin(auth): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateDateScheduleRequest>,
) -> AppResult<(StatusCode, Json<DateSchedule>)> {
    if input.block.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "block is required".into(),
        )));
    }

    let schedule = state
        .store
        .create_date_schedule(&CreateDateSchedule {
            block: input.block.trim().to_string(),
            floor_number: input.floor_number,
            schedule_date: input.schedule_date,
            pickup_time: parse_time("pickup_time", &input.pickup_time)?,
            dropoff_start_time: parse_time("dropoff_start_time", &input.dropoff_start_time)?,
            dropoff_end_time: parse_time("dropoff_end_time", &input.dropoff_end_time)?,
            is_holiday: input.is_holiday.unwrap_or(false),
            holiday_name: input.holiday_name,
            max_batches_per_day: input.max_batches_per_day.unwrap_or(DEFAULT_MAX_BATCHES_PER_DAY),
            notes: input.notes,
            created_by: Some(auth.user_id),
        })
        .await?;

    activity::record(
        state.store.as_ref(),
        Some(auth.user_id),
        activity_types::SCHEDULE_UPDATE,
        format!(
            "Date schedule created for block {} floor {} on {}",
            schedule.block, schedule.floor_number, schedule.schedule_date
        ),
        Some(serde_json::json!({ "date_schedule_id": schedule.id })),
    )
    .await;

    Ok((StatusCode::CREATED, Json(schedule)))
}

/// PUT /api/v1/date-schedules/{id}
///
/// Update a date-specific schedule (admin only).
pub async fn update(
    RequireAdmin(auth): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDateScheduleRequest>,
) -> AppResult<Json<DateSchedule>> {
    let update = UpdateDateSchedule {
        schedule_date: input.schedule_date,
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
        is_active: input.is_active,
        is_holiday: input.is_holiday,
        holiday_name: input.holiday_name,
        max_batches_per_day: input.max_batches_per_day,
        notes: input.notes,
        updated_by: Some(auth.user_id),
    };

    let schedule = state
        .store
        .update_date_schedule(id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DateSchedule",
            id,
        }))?;

    activity::record(
        state.store.as_ref(),
        Some(auth.user_id),
        activity_types::SCHEDULE_UPDATE,
        format!(
            "Date schedule {} updated ({} block {} floor {})",
            schedule.id, schedule.schedule_date, schedule.block, schedule.floor_number
        ),
        Some(serde_json::json!({ "date_schedule_id": schedule.id })),
    )
    .await;

    Ok(Json(schedule))
}

/// DELETE /api/v1/date-schedules/{id}
///
/// Delete a date-specific schedule (admin only). Returns 204 No Content.
pub async fn delete(
    RequireAdmin(auth): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = state.store.delete_date_schedule(id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "DateSchedule",
            id,
        }));
    }

    activity::record(
        state.store.as_ref(),
        Some(auth.user_id),
        activity_types::SCHEDULE_UPDATE,
        format!("Date schedule {id} deleted"),
        None,
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}
