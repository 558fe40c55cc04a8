//! Notification entity model and DTO.
//!
//! Transport outcome (`is_sent`/`sent_at`) and user acknowledgement
//! (`is_read`/`read_at`) are independent fields: a notification row is
//! always persisted before delivery is attempted, and marking it read in
//! the UI never implies it was actually sent.

use serde::Serialize;
use sqlx::FromRow;
use washline_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub batch_id: Option<DbId>,
    /// Delivery channel (`"email"` or `"sms"`).
    pub channel: String,
    pub message: String,
    pub is_sent: bool,
    pub sent_at: Option<Timestamp>,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for inserting a notification. Rows always start unsent and unread.
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub user_id: DbId,
    pub batch_id: Option<DbId>,
    pub channel: String,
    pub message: String,
}
