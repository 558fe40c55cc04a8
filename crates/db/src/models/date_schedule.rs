//! Date-specific schedule entity model and DTOs.
//!
//! A date schedule overrides the weekly schedule for one (block, floor)
//! pair on one calendar date, and can mark that date as a holiday.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::FromRow;
use washline_core::types::{DbId, Timestamp};

/// A row from the `date_schedules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DateSchedule {
    pub id: DbId,
    pub block: String,
    pub floor_number: i32,
    pub schedule_date: NaiveDate,
    pub pickup_time: NaiveTime,
    pub dropoff_start_time: NaiveTime,
    pub dropoff_end_time: NaiveTime,
    pub is_active: bool,
    pub is_holiday: bool,
    pub holiday_name: Option<String>,
    pub max_batches_per_day: i32,
    pub notes: Option<String>,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a date schedule.
#[derive(Debug, Clone)]
pub struct CreateDateSchedule {
    pub block: String,
    pub floor_number: i32,
    pub schedule_date: NaiveDate,
    pub pickup_time: NaiveTime,
    pub dropoff_start_time: NaiveTime,
    pub dropoff_end_time: NaiveTime,
    pub is_holiday: bool,
    pub holiday_name: Option<String>,
    pub max_batches_per_day: i32,
    pub notes: Option<String>,
    pub created_by: Option<DbId>,
}

/// DTO for updating a date schedule. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateDateSchedule {
    pub schedule_date: Option<NaiveDate>,
    pub pickup_time: Option<NaiveTime>,
    pub dropoff_start_time: Option<NaiveTime>,
    pub dropoff_end_time: Option<NaiveTime>,
    pub is_active: Option<bool>,
    pub is_holiday: Option<bool>,
    pub holiday_name: Option<String>,
    pub max_batches_per_day: Option<i32>,
    pub notes: Option<String>,
    pub updated_by: Option<DbId>,
}
