//! In-memory [`LaundryStore`] for demo mode and integration tests.
//!
//! Keeps every table as a `Vec` behind one async mutex. Semantics mirror
//! the PostgreSQL implementation: sequential BIGSERIAL-style ids,
//! `COALESCE`-style partial updates, and the schema's unique constraints
//! (email, batch number, template name) surfaced as [`StoreError::Conflict`].

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;
use washline_core::types::DbId;

use crate::error::StoreError;
use crate::models::activity_log::{ActivityLog, CreateActivityLog};
use crate::models::batch::{Batch, BatchUpdate, BatchWithStudent, CreateBatch};
use crate::models::date_schedule::{CreateDateSchedule, DateSchedule, UpdateDateSchedule};
use crate::models::notification::{CreateNotification, Notification};
use crate::models::schedule::{CreateWeeklySchedule, UpdateWeeklySchedule, WeeklySchedule};
use crate::models::template::{CreateTemplate, CreateTemplateSlot, ScheduleTemplate, TemplateSlot};
use crate::models::user::{CreateUser, UpdateProfile, User};
use crate::store::LaundryStore;

const DEFAULT_MAX_BATCHES_PER_DAY: i32 = 50;

#[derive(Default)]
struct Inner {
    next_id: DbId,
    users: Vec<User>,
    batches: Vec<Batch>,
    schedules: Vec<WeeklySchedule>,
    date_schedules: Vec<DateSchedule>,
    templates: Vec<ScheduleTemplate>,
    template_slots: Vec<TemplateSlot>,
    notifications: Vec<Notification>,
    activity_logs: Vec<ActivityLog>,
}

impl Inner {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory store. Cheap to construct empty; demo mode seeds it after
/// construction through the regular trait methods.
#[derive(Default)]
pub struct FixtureStore {
    inner: Mutex<Inner>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LaundryStore for FixtureStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn create_user(&self, input: &CreateUser) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().await;
        if inner.users.iter().any(|u| u.email == input.email) {
            return Err(StoreError::Conflict(format!(
                "email already registered: {}",
                input.email
            )));
        }
        let now = Utc::now();
        let user = User {
            id: inner.next_id(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            full_name: input.full_name.clone(),
            role: input.role.clone(),
            block: input.block.clone(),
            floor_number: input.floor_number,
            room_number: input.room_number.clone(),
            phone: input.phone.clone(),
            email_notifications: true,
            sms_notifications: false,
            created_at: now,
            updated_at: now,
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn user_by_id(&self, id: DbId) -> Result<Option<User>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn update_profile(
        &self,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<User>, StoreError> {
        let mut inner = self.inner.lock().await;
        let Some(user) = inner.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(full_name) = &input.full_name {
            user.full_name = full_name.clone();
        }
        if let Some(block) = &input.block {
            user.block = Some(block.clone());
        }
        if let Some(floor) = input.floor_number {
            user.floor_number = Some(floor);
        }
        if let Some(room) = &input.room_number {
            user.room_number = Some(room.clone());
        }
        if let Some(phone) = &input.phone {
            user.phone = Some(phone.clone());
        }
        if let Some(email_on) = input.email_notifications {
            user.email_notifications = email_on;
        }
        if let Some(sms_on) = input.sms_notifications {
            user.sms_notifications = sms_on;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn create_batch(&self, input: &CreateBatch) -> Result<Batch, StoreError> {
        let mut inner = self.inner.lock().await;
        if inner
            .batches
            .iter()
            .any(|b| b.batch_number == input.batch_number)
        {
            return Err(StoreError::Conflict(format!(
                "batch number already exists: {}",
                input.batch_number
            )));
        }
        let now = Utc::now();
        let batch = Batch {
            id: inner.next_id(),
            student_id: input.student_id,
            batch_number: input.batch_number.clone(),
            status: "scheduled".to_string(),
            scheduled_date: input.scheduled_date,
            dropped_off_at: None,
            ready_at: None,
            picked_up_at: None,
            staff_notes: None,
            created_at: now,
            updated_at: now,
        };
        inner.batches.push(batch.clone());
        Ok(batch)
    }

    async fn batch_by_id(&self, id: DbId) -> Result<Option<Batch>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.batches.iter().find(|b| b.id == id).cloned())
    }

    async fn batches_for_student(&self, student_id: DbId) -> Result<Vec<Batch>, StoreError> {
        let inner = self.inner.lock().await;
        let mut batches: Vec<Batch> = inner
            .batches
            .iter()
            .filter(|b| b.student_id == student_id)
            .cloned()
            .collect();
        batches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(batches)
    }

    async fn list_batches(&self) -> Result<Vec<BatchWithStudent>, StoreError> {
        let inner = self.inner.lock().await;
        let mut rows: Vec<BatchWithStudent> = inner
            .batches
            .iter()
            .filter_map(|b| {
                let student = inner.users.iter().find(|u| u.id == b.student_id)?;
                Some(BatchWithStudent {
                    id: b.id,
                    student_id: b.student_id,
                    batch_number: b.batch_number.clone(),
                    status: b.status.clone(),
                    scheduled_date: b.scheduled_date,
                    dropped_off_at: b.dropped_off_at,
                    ready_at: b.ready_at,
                    picked_up_at: b.picked_up_at,
                    staff_notes: b.staff_notes.clone(),
                    created_at: b.created_at,
                    student_name: student.full_name.clone(),
                    student_block: student.block.clone(),
                    student_floor: student.floor_number,
                    student_room: student.room_number.clone(),
                })
            })
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn update_batch(
        &self,
        id: DbId,
        update: &BatchUpdate,
    ) -> Result<Option<Batch>, StoreError> {
        let mut inner = self.inner.lock().await;
        let Some(batch) = inner.batches.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        batch.status = update.status.clone();
        if let Some(at) = update.dropped_off_at {
            batch.dropped_off_at = Some(at);
        }
        if let Some(at) = update.ready_at {
            batch.ready_at = Some(at);
        }
        if let Some(at) = update.picked_up_at {
            batch.picked_up_at = Some(at);
        }
        if let Some(notes) = &update.staff_notes {
            batch.staff_notes = Some(notes.clone());
        }
        batch.updated_at = Utc::now();
        Ok(Some(batch.clone()))
    }

    async fn list_schedules(&self) -> Result<Vec<WeeklySchedule>, StoreError> {
        let inner = self.inner.lock().await;
        let mut rows = inner.schedules.clone();
        rows.sort_by(|a, b| {
            (&a.block, a.floor_number, &a.scheduled_day)
                .cmp(&(&b.block, b.floor_number, &b.scheduled_day))
        });
        Ok(rows)
    }

    async fn schedules_for(
        &self,
        block: &str,
        floor: i32,
    ) -> Result<Vec<WeeklySchedule>, StoreError> {
        let inner = self.inner.lock().await;
        let mut rows: Vec<WeeklySchedule> = inner
            .schedules
            .iter()
            .filter(|s| s.block == block && s.floor_number == floor)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.scheduled_day.cmp(&b.scheduled_day));
        Ok(rows)
    }

    async fn create_schedule(
        &self,
        input: &CreateWeeklySchedule,
    ) -> Result<WeeklySchedule, StoreError> {
        let mut inner = self.inner.lock().await;
        let now = Utc::now();
        let schedule = WeeklySchedule {
            id: inner.next_id(),
            block: input.block.clone(),
            floor_number: input.floor_number,
            scheduled_day: input.scheduled_day.clone(),
            pickup_time: input.pickup_time,
            dropoff_start_time: input.dropoff_start_time,
            dropoff_end_time: input.dropoff_end_time,
            is_active: true,
            max_batches_per_day: input.max_batches_per_day,
            created_by: input.created_by,
            updated_by: None,
            created_at: now,
            updated_at: now,
        };
        inner.schedules.push(schedule.clone());
        Ok(schedule)
    }

    async fn update_schedule(
        &self,
        id: DbId,
        input: &UpdateWeeklySchedule,
    ) -> Result<Option<WeeklySchedule>, StoreError> {
        let mut inner = self.inner.lock().await;
        let Some(schedule) = inner.schedules.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(day) = &input.scheduled_day {
            schedule.scheduled_day = day.clone();
        }
        if let Some(time) = input.pickup_time {
            schedule.pickup_time = time;
        }
        if let Some(time) = input.dropoff_start_time {
            schedule.dropoff_start_time = time;
        }
        if let Some(time) = input.dropoff_end_time {
            schedule.dropoff_end_time = time;
        }
        if let Some(max) = input.max_batches_per_day {
            schedule.max_batches_per_day = max;
        }
        if let Some(active) = input.is_active {
            schedule.is_active = active;
        }
        if let Some(actor) = input.updated_by {
            schedule.updated_by = Some(actor);
        }
        schedule.updated_at = Utc::now();
        Ok(Some(schedule.clone()))
    }

    async fn delete_schedule(&self, id: DbId) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().await;
        let before = inner.schedules.len();
        inner.schedules.retain(|s| s.id != id);
        Ok(inner.schedules.len() < before)
    }

    async fn list_date_schedules(
        &self,
        from: Option<NaiveDate>,
    ) -> Result<Vec<DateSchedule>, StoreError> {
        let inner = self.inner.lock().await;
        let mut rows: Vec<DateSchedule> = inner
            .date_schedules
            .iter()
            .filter(|d| from.map_or(true, |from| d.schedule_date >= from))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            (a.schedule_date, &a.block, a.floor_number)
                .cmp(&(b.schedule_date, &b.block, b.floor_number))
        });
        Ok(rows)
    }

    async fn create_date_schedule(
        &self,
        input: &CreateDateSchedule,
    ) -> Result<DateSchedule, StoreError> {
        let mut inner = self.inner.lock().await;
        let now = Utc::now();
        let row = DateSchedule {
            id: inner.next_id(),
            block: input.block.clone(),
            floor_number: input.floor_number,
            schedule_date: input.schedule_date,
            pickup_time: input.pickup_time,
            dropoff_start_time: input.dropoff_start_time,
            dropoff_end_time: input.dropoff_end_time,
            is_active: true,
            is_holiday: input.is_holiday,
            holiday_name: input.holiday_name.clone(),
            max_batches_per_day: input.max_batches_per_day,
            notes: input.notes.clone(),
            created_by: input.created_by,
            updated_by: None,
            created_at: now,
            updated_at: now,
        };
        inner.date_schedules.push(row.clone());
        Ok(row)
    }

    async fn update_date_schedule(
        &self,
        id: DbId,
        input: &UpdateDateSchedule,
    ) -> Result<Option<DateSchedule>, StoreError> {
        let mut inner = self.inner.lock().await;
        let Some(row) = inner.date_schedules.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };
        if let Some(date) = input.schedule_date {
            row.schedule_date = date;
        }
        if let Some(time) = input.pickup_time {
            row.pickup_time = time;
        }
        if let Some(time) = input.dropoff_start_time {
            row.dropoff_start_time = time;
        }
        if let Some(time) = input.dropoff_end_time {
            row.dropoff_end_time = time;
        }
        if let Some(active) = input.is_active {
            row.is_active = active;
        }
        if let Some(holiday) = input.is_holiday {
            row.is_holiday = holiday;
        }
        if let Some(name) = &input.holiday_name {
            row.holiday_name = Some(name.clone());
        }
        if let Some(max) = input.max_batches_per_day {
            row.max_batches_per_day = max;
        }
        if let Some(notes) = &input.notes {
            row.notes = Some(notes.clone());
        }
        if let Some(actor) = input.updated_by {
            row.updated_by = Some(actor);
        }
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_date_schedule(&self, id: DbId) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().await;
        let before = inner.date_schedules.len();
        inner.date_schedules.retain(|d| d.id != id);
        Ok(inner.date_schedules.len() < before)
    }

    async fn list_templates(&self) -> Result<Vec<ScheduleTemplate>, StoreError> {
        let inner = self.inner.lock().await;
        let mut rows = inner.templates.clone();
        rows.sort_by(|a, b| b.is_default.cmp(&a.is_default).then(a.name.cmp(&b.name)));
        Ok(rows)
    }

    async fn create_template(
        &self,
        input: &CreateTemplate,
    ) -> Result<ScheduleTemplate, StoreError> {
        let mut inner = self.inner.lock().await;
        if inner.templates.iter().any(|t| t.name == input.name) {
            return Err(StoreError::Conflict(format!(
                "template name already in use: {}",
                input.name
            )));
        }
        let template = ScheduleTemplate {
            id: inner.next_id(),
            name: input.name.clone(),
            description: input.description.clone(),
            is_default: input.is_default,
            created_by: input.created_by,
            created_at: Utc::now(),
        };
        inner.templates.push(template.clone());
        Ok(template)
    }

    async fn delete_template(&self, id: DbId) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().await;
        let before = inner.templates.len();
        inner.templates.retain(|t| t.id != id);
        inner.template_slots.retain(|s| s.template_id != id);
        Ok(inner.templates.len() < before)
    }

    async fn template_slots(&self, template_id: DbId) -> Result<Vec<TemplateSlot>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .template_slots
            .iter()
            .filter(|s| s.template_id == template_id)
            .cloned()
            .collect())
    }

    async fn add_template_slot(
        &self,
        input: &CreateTemplateSlot,
    ) -> Result<TemplateSlot, StoreError> {
        let mut inner = self.inner.lock().await;
        let slot = TemplateSlot {
            id: inner.next_id(),
            template_id: input.template_id,
            scheduled_day: input.scheduled_day.clone(),
            pickup_time: input.pickup_time,
            dropoff_start_time: input.dropoff_start_time,
            dropoff_end_time: input.dropoff_end_time,
        };
        inner.template_slots.push(slot.clone());
        Ok(slot)
    }

    async fn apply_template(
        &self,
        template_id: DbId,
        block: &str,
        floor: i32,
        actor: DbId,
    ) -> Result<Option<u64>, StoreError> {
        let mut inner = self.inner.lock().await;
        if !inner.templates.iter().any(|t| t.id == template_id) {
            return Ok(None);
        }
        let slots: Vec<TemplateSlot> = inner
            .template_slots
            .iter()
            .filter(|s| s.template_id == template_id)
            .cloned()
            .collect();
        inner
            .schedules
            .retain(|s| !(s.block == block && s.floor_number == floor));
        let now = Utc::now();
        for slot in &slots {
            let schedule = WeeklySchedule {
                id: inner.next_id(),
                block: block.to_string(),
                floor_number: floor,
                scheduled_day: slot.scheduled_day.clone(),
                pickup_time: slot.pickup_time,
                dropoff_start_time: slot.dropoff_start_time,
                dropoff_end_time: slot.dropoff_end_time,
                is_active: true,
                max_batches_per_day: DEFAULT_MAX_BATCHES_PER_DAY,
                created_by: Some(actor),
                updated_by: None,
                created_at: now,
                updated_at: now,
            };
            inner.schedules.push(schedule);
        }
        Ok(Some(slots.len() as u64))
    }

    async fn create_notification(
        &self,
        input: &CreateNotification,
    ) -> Result<Notification, StoreError> {
        let mut inner = self.inner.lock().await;
        let notification = Notification {
            id: inner.next_id(),
            user_id: input.user_id,
            batch_id: input.batch_id,
            channel: input.channel.clone(),
            message: input.message.clone(),
            is_sent: false,
            sent_at: None,
            is_read: false,
            read_at: None,
            created_at: Utc::now(),
        };
        inner.notifications.push(notification.clone());
        Ok(notification)
    }

    async fn mark_notification_sent(&self, id: DbId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        if let Some(row) = inner.notifications.iter_mut().find(|n| n.id == id) {
            row.is_sent = true;
            row.sent_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn notifications_for_user(
        &self,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Notification>, StoreError> {
        let inner = self.inner.lock().await;
        let mut rows: Vec<Notification> = inner
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }

    async fn unread_count(&self, user_id: DbId) -> Result<i64, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .count() as i64)
    }

    async fn mark_notification_read(&self, id: DbId, user_id: DbId) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().await;
        let Some(row) = inner
            .notifications
            .iter_mut()
            .find(|n| n.id == id && n.user_id == user_id)
        else {
            return Ok(false);
        };
        row.is_read = true;
        row.read_at = Some(Utc::now());
        Ok(true)
    }

    async fn mark_all_read(&self, user_id: DbId) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().await;
        let now = Utc::now();
        let mut changed = 0u64;
        for row in inner
            .notifications
            .iter_mut()
            .filter(|n| n.user_id == user_id && !n.is_read)
        {
            row.is_read = true;
            row.read_at = Some(now);
            changed += 1;
        }
        Ok(changed)
    }

    async fn log_activity(&self, entry: &CreateActivityLog) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        let log = ActivityLog {
            id: inner.next_id(),
            user_id: entry.user_id,
            activity_type: entry.activity_type.clone(),
            description: entry.description.clone(),
            metadata: entry.metadata.clone(),
            created_at: Utc::now(),
        };
        inner.activity_logs.push(log);
        Ok(())
    }

    async fn list_activity(&self, limit: i64, offset: i64) -> Result<Vec<ActivityLog>, StoreError> {
        let inner = self.inner.lock().await;
        let mut rows = inner.activity_logs.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}
