//! Repository for the `date_schedules` table (date-specific overrides).

use chrono::NaiveDate;
use sqlx::PgPool;
use washline_core::types::DbId;

use crate::models::date_schedule::{CreateDateSchedule, DateSchedule, UpdateDateSchedule};

/// Column list for `date_schedules` queries.
const COLUMNS: &str = "id, block, floor_number, schedule_date, pickup_time, \
                       dropoff_start_time, dropoff_end_time, is_active, is_holiday, \
                       holiday_name, max_batches_per_day, notes, created_by, \
                       updated_by, created_at, updated_at";

/// Provides CRUD operations for date-specific schedules.
pub struct DateScheduleRepo;

impl DateScheduleRepo {
    /// Insert a date schedule, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDateSchedule,
    ) -> Result<DateSchedule, sqlx::Error> {
        let query = format!(
            "INSERT INTO date_schedules \
                (block, floor_number, schedule_date, pickup_time, dropoff_start_time, \
                 dropoff_end_time, is_holiday, holiday_name, max_batches_per_day, \
                 notes, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DateSchedule>(&query)
            .bind(&input.block)
            .bind(input.floor_number)
            .bind(input.schedule_date)
            .bind(input.pickup_time)
            .bind(input.dropoff_start_time)
            .bind(input.dropoff_end_time)
            .bind(input.is_holiday)
            .bind(&input.holiday_name)
            .bind(input.max_batches_per_day)
            .bind(&input.notes)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// List date schedules, optionally restricted to dates on or after `from`.
    pub async fn list(
        pool: &PgPool,
        from: Option<NaiveDate>,
    ) -> Result<Vec<DateSchedule>, sqlx::Error> {
        match from {
            Some(from) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM date_schedules \
                     WHERE schedule_date >= $1 \
                     ORDER BY schedule_date, block, floor_number"
                );
                sqlx::query_as::<_, DateSchedule>(&query)
                    .bind(from)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM date_schedules \
                     ORDER BY schedule_date, block, floor_number"
                );
                sqlx::query_as::<_, DateSchedule>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Update a date schedule. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDateSchedule,
    ) -> Result<Option<DateSchedule>, sqlx::Error> {
        let query = format!(
            "UPDATE date_schedules SET
                schedule_date = COALESCE($2, schedule_date),
                pickup_time = COALESCE($3, pickup_time),
                dropoff_start_time = COALESCE($4, dropoff_start_time),
                dropoff_end_time = COALESCE($5, dropoff_end_time),
                is_active = COALESCE($6, is_active),
                is_holiday = COALESCE($7, is_holiday),
                holiday_name = COALESCE($8, holiday_name),
                max_batches_per_day = COALESCE($9, max_batches_per_day),
                notes = COALESCE($10, notes),
                updated_by = COALESCE($11, updated_by),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DateSchedule>(&query)
            .bind(id)
            .bind(input.schedule_date)
            .bind(input.pickup_time)
            .bind(input.dropoff_start_time)
            .bind(input.dropoff_end_time)
            .bind(input.is_active)
            .bind(input.is_holiday)
            .bind(&input.holiday_name)
            .bind(input.max_batches_per_day)
            .bind(&input.notes)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a date schedule. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM date_schedules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
