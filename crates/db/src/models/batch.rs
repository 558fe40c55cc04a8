//! Laundry batch entity models and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use washline_core::types::{DbId, Timestamp};

/// A row from the `laundry_batches` table.
///
/// `status` holds the snake_case name of a
/// [`washline_core::batch::BatchStatus`]; the timestamps are stamped by
/// the lifecycle controller when the matching transition happens.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Batch {
    pub id: DbId,
    pub student_id: DbId,
    pub batch_number: String,
    pub status: String,
    pub scheduled_date: NaiveDate,
    pub dropped_off_at: Option<Timestamp>,
    pub ready_at: Option<Timestamp>,
    pub picked_up_at: Option<Timestamp>,
    pub staff_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A batch row joined with the owning student's display fields, as
/// shown on the staff dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BatchWithStudent {
    pub id: DbId,
    pub student_id: DbId,
    pub batch_number: String,
    pub status: String,
    pub scheduled_date: NaiveDate,
    pub dropped_off_at: Option<Timestamp>,
    pub ready_at: Option<Timestamp>,
    pub picked_up_at: Option<Timestamp>,
    pub staff_notes: Option<String>,
    pub created_at: Timestamp,
    pub student_name: String,
    pub student_block: Option<String>,
    pub student_floor: Option<i32>,
    pub student_room: Option<String>,
}

/// DTO for inserting a new batch. The batch number is generator-assigned
/// by the caller; status always starts at `scheduled`.
#[derive(Debug, Clone)]
pub struct CreateBatch {
    pub student_id: DbId,
    pub batch_number: String,
    pub scheduled_date: NaiveDate,
}

/// DTO for a status transition applied by the lifecycle controller.
///
/// `status` is always written; the timestamps and `staff_notes` are
/// written only when `Some` (COALESCE semantics), so an empty note
/// preserves the existing one and only the matching transition stamps
/// its timestamp.
#[derive(Debug, Clone)]
pub struct BatchUpdate {
    pub status: String,
    pub dropped_off_at: Option<Timestamp>,
    pub ready_at: Option<Timestamp>,
    pub picked_up_at: Option<Timestamp>,
    pub staff_notes: Option<String>,
}
