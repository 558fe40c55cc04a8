//! Weekly laundry schedule entity model and DTOs.

use chrono::NaiveTime;
use serde::Serialize;
use sqlx::FromRow;
use washline_core::types::{DbId, Timestamp};

/// A row from the `laundry_schedules` table: the recurring weekly
/// pickup/drop-off window for one (block, floor) pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WeeklySchedule {
    pub id: DbId,
    pub block: String,
    pub floor_number: i32,
    /// Lowercase English day name (`"monday"` .. `"sunday"`).
    pub scheduled_day: String,
    pub pickup_time: NaiveTime,
    pub dropoff_start_time: NaiveTime,
    pub dropoff_end_time: NaiveTime,
    pub is_active: bool,
    pub max_batches_per_day: i32,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a weekly schedule. New rows start active.
#[derive(Debug, Clone)]
pub struct CreateWeeklySchedule {
    pub block: String,
    pub floor_number: i32,
    pub scheduled_day: String,
    pub pickup_time: NaiveTime,
    pub dropoff_start_time: NaiveTime,
    pub dropoff_end_time: NaiveTime,
    pub max_batches_per_day: i32,
    pub created_by: Option<DbId>,
}

/// DTO for updating a weekly schedule. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateWeeklySchedule {
    pub scheduled_day: Option<String>,
    pub pickup_time: Option<NaiveTime>,
    pub dropoff_start_time: Option<NaiveTime>,
    pub dropoff_end_time: Option<NaiveTime>,
    pub max_batches_per_day: Option<i32>,
    pub is_active: Option<bool>,
    pub updated_by: Option<DbId>,
}
