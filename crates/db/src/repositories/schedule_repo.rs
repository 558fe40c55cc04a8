//! Repository for the `laundry_schedules` table (weekly schedules).

use sqlx::PgPool;
use washline_core::types::DbId;

use crate::models::schedule::{CreateWeeklySchedule, UpdateWeeklySchedule, WeeklySchedule};

/// Column list for `laundry_schedules` queries.
const COLUMNS: &str = "id, block, floor_number, scheduled_day, pickup_time, \
                       dropoff_start_time, dropoff_end_time, is_active, \
                       max_batches_per_day, created_by, updated_by, created_at, updated_at";

/// Provides CRUD operations for weekly schedules.
pub struct ScheduleRepo;

impl ScheduleRepo {
    /// Insert a weekly schedule, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWeeklySchedule,
    ) -> Result<WeeklySchedule, sqlx::Error> {
        let query = format!(
            "INSERT INTO laundry_schedules \
                (block, floor_number, scheduled_day, pickup_time, dropoff_start_time, \
                 dropoff_end_time, max_batches_per_day, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WeeklySchedule>(&query)
            .bind(&input.block)
            .bind(input.floor_number)
            .bind(&input.scheduled_day)
            .bind(input.pickup_time)
            .bind(input.dropoff_start_time)
            .bind(input.dropoff_end_time)
            .bind(input.max_batches_per_day)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// List all weekly schedules ordered by block, floor, day.
    pub async fn list(pool: &PgPool) -> Result<Vec<WeeklySchedule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM laundry_schedules \
             ORDER BY block, floor_number, scheduled_day"
        );
        sqlx::query_as::<_, WeeklySchedule>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the weekly schedules for one (block, floor) pair.
    pub async fn list_for(
        pool: &PgPool,
        block: &str,
        floor: i32,
    ) -> Result<Vec<WeeklySchedule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM laundry_schedules \
             WHERE block = $1 AND floor_number = $2 \
             ORDER BY scheduled_day"
        );
        sqlx::query_as::<_, WeeklySchedule>(&query)
            .bind(block)
            .bind(floor)
            .fetch_all(pool)
            .await
    }

    /// Update a weekly schedule. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWeeklySchedule,
    ) -> Result<Option<WeeklySchedule>, sqlx::Error> {
        let query = format!(
            "UPDATE laundry_schedules SET
                scheduled_day = COALESCE($2, scheduled_day),
                pickup_time = COALESCE($3, pickup_time),
                dropoff_start_time = COALESCE($4, dropoff_start_time),
                dropoff_end_time = COALESCE($5, dropoff_end_time),
                max_batches_per_day = COALESCE($6, max_batches_per_day),
                is_active = COALESCE($7, is_active),
                updated_by = COALESCE($8, updated_by),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WeeklySchedule>(&query)
            .bind(id)
            .bind(&input.scheduled_day)
            .bind(input.pickup_time)
            .bind(input.dropoff_start_time)
            .bind(input.dropoff_end_time)
            .bind(input.max_batches_per_day)
            .bind(input.is_active)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a weekly schedule. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM laundry_schedules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
