//! Handlers for the `/templates` resource (schedule templates).
//!
//! Templates are named weekly patterns; applying one to a (block, floor)
//! pair atomically replaces that pair's weekly schedule rows.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use washline_core::activity::activity_types;
use washline_core::error::CoreError;
use washline_core::types::DbId;
use washline_db::models::template::{
    CreateTemplate, CreateTemplateSlot, ScheduleTemplate, TemplateSlot,
};

use super::{parse_time, validate_day};
use crate::activity;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /templates`.
#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    pub name: String,
    pub description: Option<String>,
    pub is_default: Option<bool>,
}

/// Request body for `POST /templates/{id}/slots`.
#[derive(Debug, Deserialize)]
pub struct CreateSlotRequest {
    pub scheduled_day: String,
    pub pickup_time: String,
    pub dropoff_start_time: String,
    pub dropoff_end_time: String,
}

/// Request body for `POST /templates/{id}/apply`.
#[derive(Debug, Deserialize)]
pub struct ApplyTemplateRequest {
    pub block: String,
    pub floor_number: i32,
}

/// Response body for `POST /templates/{id}/apply`.
#[derive(Debug, Serialize)]
pub struct ApplyTemplateResponse {
    /// Number of weekly schedule rows created.
    pub schedules_created: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/templates
pub async fn list(
    RequireAdmin(_auth): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ScheduleTemplate>>> {
    let templates = state.store.list_templates().await?;
    Ok(Json(templates))
}

/// POST /api/v1/templates
pub async fn create(
    RequireAdmin(auth): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTemplateRequest>,
) -> AppResult<(StatusCode, Json<ScheduleTemplate>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Template name is required".into(),
        )));
    }

    let template = state
        .store
        .create_template(&CreateTemplate {
            name: input.name.trim().to_string(),
            description: input.description,
            is_default: input.is_default.unwrap_or(false),
            created_by: Some(auth.user_id),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// DELETE /api/v1/templates/{id}
///
/// Delete a template and its slots. Returns 204 No Content.
pub async fn delete(
    RequireAdmin(_auth): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = state.store.delete_template(id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/templates/{id}/slots
pub async fn list_slots(
    RequireAdmin(_auth): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<TemplateSlot>>> {
    let slots = state.store.template_slots(id).await?;
    Ok(Json(slots))
}

/// POST /api/v1/templates/{id}/slots
pub async fn add_slot(
    RequireAdmin(_auth): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateSlotRequest>,
) -> AppResult<(StatusCode, Json<TemplateSlot>)> {
    validate_day(&input.scheduled_day)?;

    let slot = state
        .store
        .add_template_slot(&CreateTemplateSlot {
            template_id: id,
            scheduled_day: input.scheduled_day,
            pickup_time: parse_time("pickup_time", &input.pickup_time)?,
            dropoff_start_time: parse_time("dropoff_start_time", &input.dropoff_start_time)?,
            dropoff_end_time: parse_time("dropoff_end_time", &input.dropoff_end_time)?,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(slot)))
}

/// POST /api/v1/templates/{id}/apply
///
/// Replace the target (block, floor) pair's weekly schedule with rows
/// derived from this template's slots. All or nothing.
pub async fn apply(
    RequireAdmin(auth): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ApplyTemplateRequest>,
) -> AppResult<Json<ApplyTemplateResponse>> {
    if input.block.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "block is required".into(),
        )));
    }

    let created = state
        .store
        .apply_template(id, input.block.trim(), input.floor_number, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }))?;

    activity::record(
        state.store.as_ref(),
        Some(auth.user_id),
        activity_types::SCHEDULE_UPDATE,
        format!(
            "Template {} applied to block {} floor {} ({} schedules)",
            id, input.block, input.floor_number, created
        ),
        Some(serde_json::json!({
            "template_id": id,
            "block": input.block,
            "floor_number": input.floor_number,
            "schedules_created": created,
        })),
    )
    .await;

    Ok(Json(ApplyTemplateResponse {
        schedules_created: created,
    }))
}
