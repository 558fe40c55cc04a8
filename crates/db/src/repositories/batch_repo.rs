//! Repository for the `laundry_batches` table.

use sqlx::PgPool;
use washline_core::types::DbId;

use crate::models::batch::{Batch, BatchUpdate, BatchWithStudent, CreateBatch};

/// Column list for `laundry_batches` queries.
const COLUMNS: &str = "id, student_id, batch_number, status, scheduled_date, \
                       dropped_off_at, ready_at, picked_up_at, staff_notes, \
                       created_at, updated_at";

/// Column list for the staff listing (batch joined with student fields).
const JOINED_COLUMNS: &str = "b.id, b.student_id, b.batch_number, b.status, \
                              b.scheduled_date, b.dropped_off_at, b.ready_at, \
                              b.picked_up_at, b.staff_notes, b.created_at, \
                              u.full_name AS student_name, u.block AS student_block, \
                              u.floor_number AS student_floor, u.room_number AS student_room";

/// Provides CRUD operations for laundry batches.
pub struct BatchRepo;

impl BatchRepo {
    /// Insert a new batch with status `scheduled`, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBatch) -> Result<Batch, sqlx::Error> {
        let query = format!(
            "INSERT INTO laundry_batches (student_id, batch_number, scheduled_date, status)
             VALUES ($1, $2, $3, 'scheduled')
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Batch>(&query)
            .bind(input.student_id)
            .bind(&input.batch_number)
            .bind(input.scheduled_date)
            .fetch_one(pool)
            .await
    }

    /// Find a batch by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Batch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM laundry_batches WHERE id = $1");
        sqlx::query_as::<_, Batch>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one student's batches, newest first.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<Batch>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM laundry_batches \
             WHERE student_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Batch>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// List all batches joined with student display fields, newest first.
    pub async fn list_with_students(pool: &PgPool) -> Result<Vec<BatchWithStudent>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM laundry_batches b \
             JOIN users u ON u.id = b.student_id \
             ORDER BY b.created_at DESC"
        );
        sqlx::query_as::<_, BatchWithStudent>(&query)
            .fetch_all(pool)
            .await
    }

    /// Apply a status transition. `status` is always written; timestamps
    /// and `staff_notes` only when supplied (COALESCE).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn apply_update(
        pool: &PgPool,
        id: DbId,
        update: &BatchUpdate,
    ) -> Result<Option<Batch>, sqlx::Error> {
        let query = format!(
            "UPDATE laundry_batches SET
                status = $2,
                dropped_off_at = COALESCE($3, dropped_off_at),
                ready_at = COALESCE($4, ready_at),
                picked_up_at = COALESCE($5, picked_up_at),
                staff_notes = COALESCE($6, staff_notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Batch>(&query)
            .bind(id)
            .bind(&update.status)
            .bind(update.dropped_off_at)
            .bind(update.ready_at)
            .bind(update.picked_up_at)
            .bind(&update.staff_notes)
            .fetch_optional(pool)
            .await
    }
}
