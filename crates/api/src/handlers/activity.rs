//! Handlers for the `/activity` resource (admin audit trail).

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use washline_db::models::activity_log::ActivityLog;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for `GET /activity`.
#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    /// Maximum number of results. Defaults to 50, capped at 500.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

/// Maximum page size for activity listing.
const MAX_LIMIT: i64 = 500;

/// Default page size for activity listing.
const DEFAULT_LIMIT: i64 = 50;

/// GET /api/v1/activity
///
/// List activity log entries, newest first (admin only).
pub async fn list(
    RequireAdmin(_auth): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ActivityQuery>,
) -> AppResult<Json<Vec<ActivityLog>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);
    let entries = state.store.list_activity(limit, offset).await?;
    Ok(Json(entries))
}
