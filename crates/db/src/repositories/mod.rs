//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. [`crate::pg::PgStore`]
//! composes these behind the [`crate::store::LaundryStore`] trait.

pub mod activity_log_repo;
pub mod batch_repo;
pub mod date_schedule_repo;
pub mod notification_repo;
pub mod schedule_repo;
pub mod template_repo;
pub mod user_repo;

pub use activity_log_repo::ActivityLogRepo;
pub use batch_repo::BatchRepo;
pub use date_schedule_repo::DateScheduleRepo;
pub use notification_repo::NotificationRepo;
pub use schedule_repo::ScheduleRepo;
pub use template_repo::TemplateRepo;
pub use user_repo::UserRepo;
