//! The storage seam: one trait, two implementations.
//!
//! [`LaundryStore`] is the complete data-access surface of the
//! application. [`crate::pg::PgStore`] backs it with PostgreSQL through
//! the repository layer; [`crate::fixture::FixtureStore`] backs it with
//! canned in-memory data for demo mode and tests. Which one runs is
//! decided once at startup, never inline in business logic.

use async_trait::async_trait;
use chrono::NaiveDate;
use washline_core::types::DbId;

use crate::error::StoreError;
use crate::models::activity_log::{ActivityLog, CreateActivityLog};
use crate::models::batch::{Batch, BatchUpdate, BatchWithStudent, CreateBatch};
use crate::models::date_schedule::{CreateDateSchedule, DateSchedule, UpdateDateSchedule};
use crate::models::notification::{CreateNotification, Notification};
use crate::models::schedule::{CreateWeeklySchedule, UpdateWeeklySchedule, WeeklySchedule};
use crate::models::template::{CreateTemplate, CreateTemplateSlot, ScheduleTemplate, TemplateSlot};
use crate::models::user::{CreateUser, UpdateProfile, User};

#[async_trait]
pub trait LaundryStore: Send + Sync {
    /// Cheap liveness probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;

    // --- Users ---

    async fn create_user(&self, input: &CreateUser) -> Result<User, StoreError>;
    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn user_by_id(&self, id: DbId) -> Result<Option<User>, StoreError>;
    async fn update_profile(
        &self,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<User>, StoreError>;

    // --- Batches ---

    async fn create_batch(&self, input: &CreateBatch) -> Result<Batch, StoreError>;
    async fn batch_by_id(&self, id: DbId) -> Result<Option<Batch>, StoreError>;
    async fn batches_for_student(&self, student_id: DbId) -> Result<Vec<Batch>, StoreError>;
    /// All batches joined with student display info, newest first.
    async fn list_batches(&self) -> Result<Vec<BatchWithStudent>, StoreError>;
    async fn update_batch(
        &self,
        id: DbId,
        update: &BatchUpdate,
    ) -> Result<Option<Batch>, StoreError>;

    // --- Weekly schedules ---

    async fn list_schedules(&self) -> Result<Vec<WeeklySchedule>, StoreError>;
    async fn schedules_for(
        &self,
        block: &str,
        floor: i32,
    ) -> Result<Vec<WeeklySchedule>, StoreError>;
    async fn create_schedule(
        &self,
        input: &CreateWeeklySchedule,
    ) -> Result<WeeklySchedule, StoreError>;
    async fn update_schedule(
        &self,
        id: DbId,
        input: &UpdateWeeklySchedule,
    ) -> Result<Option<WeeklySchedule>, StoreError>;
    async fn delete_schedule(&self, id: DbId) -> Result<bool, StoreError>;

    // --- Date schedules ---

    /// List date schedules soonest first; when `from` is given, only
    /// dates on or after it.
    async fn list_date_schedules(
        &self,
        from: Option<NaiveDate>,
    ) -> Result<Vec<DateSchedule>, StoreError>;
    async fn create_date_schedule(
        &self,
        input: &CreateDateSchedule,
    ) -> Result<DateSchedule, StoreError>;
    async fn update_date_schedule(
        &self,
        id: DbId,
        input: &UpdateDateSchedule,
    ) -> Result<Option<DateSchedule>, StoreError>;
    async fn delete_date_schedule(&self, id: DbId) -> Result<bool, StoreError>;

    // --- Schedule templates ---

    async fn list_templates(&self) -> Result<Vec<ScheduleTemplate>, StoreError>;
    async fn create_template(&self, input: &CreateTemplate)
        -> Result<ScheduleTemplate, StoreError>;
    async fn delete_template(&self, id: DbId) -> Result<bool, StoreError>;
    async fn template_slots(&self, template_id: DbId) -> Result<Vec<TemplateSlot>, StoreError>;
    async fn add_template_slot(
        &self,
        input: &CreateTemplateSlot,
    ) -> Result<TemplateSlot, StoreError>;
    /// Replace the weekly schedule rows of `(block, floor)` with rows
    /// derived from the template's slots. Returns the number of rows
    /// written, or `None` if the template does not exist.
    async fn apply_template(
        &self,
        template_id: DbId,
        block: &str,
        floor: i32,
        actor: DbId,
    ) -> Result<Option<u64>, StoreError>;

    // --- Notifications ---

    async fn create_notification(
        &self,
        input: &CreateNotification,
    ) -> Result<Notification, StoreError>;
    async fn mark_notification_sent(&self, id: DbId) -> Result<(), StoreError>;
    async fn notifications_for_user(
        &self,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Notification>, StoreError>;
    async fn unread_count(&self, user_id: DbId) -> Result<i64, StoreError>;
    async fn mark_notification_read(&self, id: DbId, user_id: DbId) -> Result<bool, StoreError>;
    async fn mark_all_read(&self, user_id: DbId) -> Result<u64, StoreError>;

    // --- Activity log ---

    async fn log_activity(&self, entry: &CreateActivityLog) -> Result<(), StoreError>;
    async fn list_activity(&self, limit: i64, offset: i64) -> Result<Vec<ActivityLog>, StoreError>;
}
