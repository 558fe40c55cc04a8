//! Activity log entity model and DTO. Append-only audit trail.

use serde::Serialize;
use sqlx::FromRow;
use washline_core::types::{DbId, Timestamp};

/// A row from the `activity_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityLog {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub activity_type: String,
    pub description: String,
    pub metadata: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

/// DTO for appending an activity log entry.
#[derive(Debug, Clone)]
pub struct CreateActivityLog {
    pub user_id: Option<DbId>,
    pub activity_type: String,
    pub description: String,
    pub metadata: Option<serde_json::Value>,
}
