//! Handlers for the `/batches` resource.
//!
//! Students create and view their own batches; staff see every batch and
//! drive the status lifecycle through [`crate::lifecycle`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use washline_core::batch::{generate_batch_number, BatchStatus};
use washline_core::error::CoreError;
use washline_core::roles::ROLE_STUDENT;
use washline_core::types::DbId;
use washline_db::models::batch::{Batch, BatchWithStudent, CreateBatch};

use crate::error::{AppError, AppResult};
use crate::lifecycle;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireStaff, RequireStudent};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /batches`.
#[derive(Debug, Deserialize)]
pub struct CreateBatchRequest {
    /// Intended drop-off date.
    pub scheduled_date: NaiveDate,
}

/// Request body for `PUT /batches/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: BatchStatus,
    /// Replaces the staff notes when non-empty; an empty or missing note
    /// preserves the existing one.
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/batches
///
/// Create a batch for the authenticated student. The batch number is
/// server-assigned and the status always starts at `scheduled`.
pub async fn create(
    RequireStudent(auth): RequireStudent,
    State(state): State<AppState>,
    Json(input): Json<CreateBatchRequest>,
) -> AppResult<(StatusCode, Json<Batch>)> {
    let batch = state
        .store
        .create_batch(&CreateBatch {
            student_id: auth.user_id,
            batch_number: generate_batch_number(),
            scheduled_date: input.scheduled_date,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(batch)))
}

/// GET /api/v1/batches/mine
///
/// List the authenticated user's own batches, newest first.
pub async fn list_mine(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Batch>>> {
    let batches = state.store.batches_for_student(auth.user_id).await?;
    Ok(Json(batches))
}

/// GET /api/v1/batches
///
/// Staff dashboard listing: every batch joined with student display info.
pub async fn list_all(
    RequireStaff(_auth): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BatchWithStudent>>> {
    let batches = state.store.list_batches().await?;
    Ok(Json(batches))
}

/// GET /api/v1/batches/{id}
///
/// Fetch one batch. Students may only read their own.
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Batch>> {
    let batch = state
        .store
        .batch_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Batch",
            id,
        }))?;

    if auth.role == ROLE_STUDENT && batch.student_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only view your own batches".into(),
        )));
    }

    Ok(Json(batch))
}

/// PUT /api/v1/batches/{id}/status
///
/// Advance a batch through its lifecycle. Staff only; illegal transitions
/// return 409 without modifying the batch.
pub async fn update_status(
    RequireStaff(auth): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<Batch>> {
    let batch = lifecycle::transition_batch(
        state.store.as_ref(),
        state.mailer.as_ref(),
        auth.user_id,
        id,
        input.status,
        input.notes,
    )
    .await?;
    Ok(Json(batch))
}
