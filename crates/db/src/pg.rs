//! PostgreSQL-backed [`LaundryStore`] implementation.
//!
//! A thin composition layer: each method delegates to the matching
//! repository, converting `sqlx::Error` into [`StoreError`] via `?`.

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
use crate::repositories::{
    ActivityLogRepo, BatchRepo, DateScheduleRepo, NotificationRepo, ScheduleRepo, TemplateRepo,
    UserRepo,
};
use crate::store::LaundryStore;
use crate::DbPool;

/// Live store backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl LaundryStore for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn create_user(&self, input: &CreateUser) -> Result<User, StoreError> {
        Ok(UserRepo::create(&self.pool, input).await?)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::find_by_email(&self.pool, email).await?)
    }

    async fn user_by_id(&self, id: DbId) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update_profile(
        &self,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::update_profile(&self.pool, id, input).await?)
    }

    async fn create_batch(&self, input: &CreateBatch) -> Result<Batch, StoreError> {
        Ok(BatchRepo::create(&self.pool, input).await?)
    }

    async fn batch_by_id(&self, id: DbId) -> Result<Option<Batch>, StoreError> {
        Ok(BatchRepo::find_by_id(&self.pool, id).await?)
    }

    async fn batches_for_student(&self, student_id: DbId) -> Result<Vec<Batch>, StoreError> {
        Ok(BatchRepo::list_for_student(&self.pool, student_id).await?)
    }

    async fn list_batches(&self) -> Result<Vec<BatchWithStudent>, StoreError> {
        Ok(BatchRepo::list_with_students(&self.pool).await?)
    }

    async fn update_batch(
        &self,
        id: DbId,
        update: &BatchUpdate,
    ) -> Result<Option<Batch>, StoreError> {
        Ok(BatchRepo::apply_update(&self.pool, id, update).await?)
    }

    async fn list_schedules(&self) -> Result<Vec<WeeklySchedule>, StoreError> {
        Ok(ScheduleRepo::list(&self.pool).await?)
    }

    async fn schedules_for(
        &self,
        block: &str,
        floor: i32,
    ) -> Result<Vec<WeeklySchedule>, StoreError> {
        Ok(ScheduleRepo::list_for(&self.pool, block, floor).await?)
    }

    async fn create_schedule(
        &self,
        input: &CreateWeeklySchedule,
    ) -> Result<WeeklySchedule, StoreError> {
        Ok(ScheduleRepo::create(&self.pool, input).await?)
    }

    async fn update_schedule(
        &self,
        id: DbId,
        input: &UpdateWeeklySchedule,
    ) -> Result<Option<WeeklySchedule>, StoreError> {
        Ok(ScheduleRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_schedule(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(ScheduleRepo::delete(&self.pool, id).await?)
    }

    async fn list_date_schedules(
        &self,
        from: Option<NaiveDate>,
    ) -> Result<Vec<DateSchedule>, StoreError> {
        Ok(DateScheduleRepo::list(&self.pool, from).await?)
    }

    async fn create_date_schedule(
        &self,
        input: &CreateDateSchedule,
    ) -> Result<DateSchedule, StoreError> {
        Ok(DateScheduleRepo::create(&self.pool, input).await?)
    }

    async fn update_date_schedule(
        &self,
        id: DbId,
        input: &UpdateDateSchedule,
    ) -> Result<Option<DateSchedule>, StoreError> {
        Ok(DateScheduleRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_date_schedule(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(DateScheduleRepo::delete(&self.pool, id).await?)
    }

    async fn list_templates(&self) -> Result<Vec<ScheduleTemplate>, StoreError> {
        Ok(TemplateRepo::list(&self.pool).await?)
    }

    async fn create_template(
        &self,
        input: &CreateTemplate,
    ) -> Result<ScheduleTemplate, StoreError> {
        Ok(TemplateRepo::create(&self.pool, input).await?)
    }

    async fn delete_template(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(TemplateRepo::delete(&self.pool, id).await?)
    }

    async fn template_slots(&self, template_id: DbId) -> Result<Vec<TemplateSlot>, StoreError> {
        Ok(TemplateRepo::slots(&self.pool, template_id).await?)
    }

    async fn add_template_slot(
        &self,
        input: &CreateTemplateSlot,
    ) -> Result<TemplateSlot, StoreError> {
        Ok(TemplateRepo::add_slot(&self.pool, input).await?)
    }

    async fn apply_template(
        &self,
        template_id: DbId,
        block: &str,
        floor: i32,
        actor: DbId,
    ) -> Result<Option<u64>, StoreError> {
        Ok(TemplateRepo::apply(&self.pool, template_id, block, floor, actor).await?)
    }

    async fn create_notification(
        &self,
        input: &CreateNotification,
    ) -> Result<Notification, StoreError> {
        Ok(NotificationRepo::create(&self.pool, input).await?)
    }

    async fn mark_notification_sent(&self, id: DbId) -> Result<(), StoreError> {
        NotificationRepo::mark_sent(&self.pool, id).await?;
        Ok(())
    }

    async fn notifications_for_user(
        &self,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Notification>, StoreError> {
        Ok(NotificationRepo::list_for_user(&self.pool, user_id, limit).await?)
    }

    async fn unread_count(&self, user_id: DbId) -> Result<i64, StoreError> {
        Ok(NotificationRepo::unread_count(&self.pool, user_id).await?)
    }

    async fn mark_notification_read(&self, id: DbId, user_id: DbId) -> Result<bool, StoreError> {
        Ok(NotificationRepo::mark_read(&self.pool, id, user_id)
            .await?
            .is_some())
    }

    async fn mark_all_read(&self, user_id: DbId) -> Result<u64, StoreError> {
        Ok(NotificationRepo::mark_all_read(&self.pool, user_id).await?)
    }

    async fn log_activity(&self, entry: &CreateActivityLog) -> Result<(), StoreError> {
        ActivityLogRepo::create(&self.pool, entry).await?;
        Ok(())
    }

    async fn list_activity(&self, limit: i64, offset: i64) -> Result<Vec<ActivityLog>, StoreError> {
        Ok(ActivityLogRepo::list(&self.pool, limit, offset).await?)
    }
}
