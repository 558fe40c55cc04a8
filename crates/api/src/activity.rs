//! Activity log recording.
//!
//! Logging is best-effort: a failed insert is logged and swallowed so an
//! audit hiccup never fails the user-facing operation it decorates.

use washline_core::types::DbId;
use washline_db::models::activity_log::CreateActivityLog;
use washline_db::LaundryStore;

/// Record an activity log entry, swallowing storage failures.
pub async fn record(
    store: &dyn LaundryStore,
    user_id: Option<DbId>,
    activity_type: &str,
    description: String,
    metadata: Option<serde_json::Value>,
) {
    let entry = CreateActivityLog {
        user_id,
        activity_type: activity_type.to_string(),
        description,
        metadata,
    };
    if let Err(err) = store.log_activity(&entry).await {
        tracing::warn!(error = %err, activity_type, "Failed to record activity log entry");
    }
}
