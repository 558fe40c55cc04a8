//! Activity log constants.
//!
//! The activity log is an append-only audit trail; these are the known
//! `activity_type` values written by the API layer.

pub mod activity_types {
    pub const LOGIN: &str = "login";
    pub const STATUS_CHANGE: &str = "status_change";
    pub const NOTIFICATION_SENT: &str = "notification_sent";
    pub const SCHEDULE_UPDATE: &str = "schedule_update";
}
