//! Repository for schedule templates and their slots.
//!
//! `apply` replaces a (block, floor) pair's weekly schedule rows with the
//! template's slots inside one transaction.

use sqlx::PgPool;
use washline_core::types::DbId;

use crate::models::template::{CreateTemplate, CreateTemplateSlot, ScheduleTemplate, TemplateSlot};

/// Column list for `schedule_templates` queries.
const TEMPLATE_COLUMNS: &str = "id, name, description, is_default, created_by, created_at";

/// Column list for `template_slots` queries.
const SLOT_COLUMNS: &str =
    "id, template_id, scheduled_day, pickup_time, dropoff_start_time, dropoff_end_time";

/// Fallback daily capacity for schedules created from a template.
const DEFAULT_MAX_BATCHES_PER_DAY: i32 = 50;

/// Provides operations for schedule templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Insert a template, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTemplate,
    ) -> Result<ScheduleTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO schedule_templates (name, description, is_default, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {TEMPLATE_COLUMNS}"
        );
        sqlx::query_as::<_, ScheduleTemplate>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_default)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// List all templates, default templates first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ScheduleTemplate>, sqlx::Error> {
        let query = format!(
            "SELECT {TEMPLATE_COLUMNS} FROM schedule_templates \
             ORDER BY is_default DESC, name"
        );
        sqlx::query_as::<_, ScheduleTemplate>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a template (slots go with it via ON DELETE CASCADE).
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM schedule_templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a template's slots in weekday order as stored.
    pub async fn slots(pool: &PgPool, template_id: DbId) -> Result<Vec<TemplateSlot>, sqlx::Error> {
        let query = format!(
            "SELECT {SLOT_COLUMNS} FROM template_slots \
             WHERE template_id = $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, TemplateSlot>(&query)
            .bind(template_id)
            .fetch_all(pool)
            .await
    }

    /// Append a slot to a template, returning the created row.
    pub async fn add_slot(
        pool: &PgPool,
        input: &CreateTemplateSlot,
    ) -> Result<TemplateSlot, sqlx::Error> {
        let query = format!(
            "INSERT INTO template_slots \
                (template_id, scheduled_day, pickup_time, dropoff_start_time, dropoff_end_time)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {SLOT_COLUMNS}"
        );
        sqlx::query_as::<_, TemplateSlot>(&query)
            .bind(input.template_id)
            .bind(&input.scheduled_day)
            .bind(input.pickup_time)
            .bind(input.dropoff_start_time)
            .bind(input.dropoff_end_time)
            .fetch_one(pool)
            .await
    }

    /// Apply a template to a (block, floor) pair: delete the pair's weekly
    /// schedule rows, then insert one row per slot. All or nothing.
    ///
    /// Returns `None` if the template does not exist, otherwise the number
    /// of schedule rows created.
    pub async fn apply(
        pool: &PgPool,
        template_id: DbId,
        block: &str,
        floor: i32,
        actor: DbId,
    ) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM schedule_templates WHERE id = $1")
                .bind(template_id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let slot_query = format!(
            "SELECT {SLOT_COLUMNS} FROM template_slots WHERE template_id = $1 ORDER BY id"
        );
        let slots: Vec<TemplateSlot> = sqlx::query_as(&slot_query)
            .bind(template_id)
            .fetch_all(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM laundry_schedules WHERE block = $1 AND floor_number = $2")
            .bind(block)
            .bind(floor)
            .execute(&mut *tx)
            .await?;

        for slot in &slots {
            sqlx::query(
                "INSERT INTO laundry_schedules \
                    (block, floor_number, scheduled_day, pickup_time, dropoff_start_time, \
                     dropoff_end_time, max_batches_per_day, created_by)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
            )
            .bind(block)
            .bind(floor)
            .bind(&slot.scheduled_day)
            .bind(slot.pickup_time)
            .bind(slot.dropoff_start_time)
            .bind(slot.dropoff_end_time)
            .bind(DEFAULT_MAX_BATCHES_PER_DAY)
            .bind(actor)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(Some(slots.len() as u64))
    }
}
