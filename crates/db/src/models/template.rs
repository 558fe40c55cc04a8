//! Schedule template entity models and DTOs.
//!
//! A template is a named weekly pattern; its slots are applied in bulk
//! to a (block, floor) pair, replacing that pair's weekly schedule rows.

use chrono::NaiveTime;
use serde::Serialize;
use sqlx::FromRow;
use washline_core::types::{DbId, Timestamp};

/// A row from the `schedule_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScheduleTemplate {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_default: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for inserting a schedule template.
#[derive(Debug, Clone)]
pub struct CreateTemplate {
    pub name: String,
    pub description: Option<String>,
    pub is_default: bool,
    pub created_by: Option<DbId>,
}

/// A row from the `template_slots` table: one weekday window within a
/// template.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TemplateSlot {
    pub id: DbId,
    pub template_id: DbId,
    pub scheduled_day: String,
    pub pickup_time: NaiveTime,
    pub dropoff_start_time: NaiveTime,
    pub dropoff_end_time: NaiveTime,
}

/// DTO for inserting a template slot.
#[derive(Debug, Clone)]
pub struct CreateTemplateSlot {
    pub template_id: DbId,
    pub scheduled_day: String,
    pub pickup_time: NaiveTime,
    pub dropoff_start_time: NaiveTime,
    pub dropoff_end_time: NaiveTime,
}
