//! Demo-mode seed data.
//!
//! When no `DATABASE_URL` is configured the server runs against an
//! in-memory store seeded with three well-known accounts, a weekly
//! schedule, and a sample batch so the whole flow can be exercised
//! without any infrastructure.

use chrono::{Duration, NaiveTime, Utc};
use washline_core::batch::generate_batch_number;
use washline_core::roles::{ROLE_ADMIN, ROLE_STAFF, ROLE_STUDENT};
use washline_db::models::batch::CreateBatch;
use washline_db::models::schedule::CreateWeeklySchedule;
use washline_db::models::template::{CreateTemplate, CreateTemplateSlot};
use washline_db::models::user::CreateUser;
use washline_db::{LaundryStore, StoreError};

use crate::auth::password::hash_password;

/// Demo account credentials, also logged at startup.
pub const DEMO_ACCOUNTS: [(&str, &str, &str); 3] = [
    ("admin@college.edu", "admin123", ROLE_ADMIN),
    ("staff@college.edu", "staff123", ROLE_STAFF),
    ("john.doe@student.college.edu", "student123", ROLE_STUDENT),
];

/// Seed the store with demo users, schedules, a template, and a batch.
pub async fn seed(store: &dyn LaundryStore) -> Result<(), StoreError> {
    let admin = store
        .create_user(&demo_user(
            "admin@college.edu",
            "admin123",
            "Admin User",
            ROLE_ADMIN,
            None,
        ))
        .await?;

    store
        .create_user(&demo_user(
            "staff@college.edu",
            "staff123",
            "Staff User",
            ROLE_STAFF,
            None,
        ))
        .await?;

    let student = store
        .create_user(&demo_user(
            "john.doe@student.college.edu",
            "student123",
            "John Doe",
            ROLE_STUDENT,
            Some(("A", 1, "101")),
        ))
        .await?;

    // A weekly window for the demo student's block and floor.
    let pickup = NaiveTime::from_hms_opt(18, 0, 0).expect("valid demo time");
    let dropoff_start = NaiveTime::from_hms_opt(7, 0, 0).expect("valid demo time");
    let dropoff_end = NaiveTime::from_hms_opt(9, 0, 0).expect("valid demo time");
    for day in ["monday", "thursday"] {
        store
            .create_schedule(&CreateWeeklySchedule {
                block: "A".to_string(),
                floor_number: 1,
                scheduled_day: day.to_string(),
                pickup_time: pickup,
                dropoff_start_time: dropoff_start,
                dropoff_end_time: dropoff_end,
                max_batches_per_day: 50,
                created_by: Some(admin.id),
            })
            .await?;
    }

    // A default template admins can apply to other floors.
    let template = store
        .create_template(&CreateTemplate {
            name: "Standard Weekly".to_string(),
            description: Some("Monday and Thursday pickup, morning drop-off".to_string()),
            is_default: true,
            created_by: Some(admin.id),
        })
        .await?;
    for day in ["monday", "thursday"] {
        store
            .add_template_slot(&CreateTemplateSlot {
                template_id: template.id,
                scheduled_day: day.to_string(),
                pickup_time: pickup,
                dropoff_start_time: dropoff_start,
                dropoff_end_time: dropoff_end,
            })
            .await?;
    }

    // One scheduled batch for the demo student.
    store
        .create_batch(&CreateBatch {
            student_id: student.id,
            batch_number: generate_batch_number(),
            scheduled_date: (Utc::now() + Duration::days(1)).date_naive(),
        })
        .await?;

    tracing::info!("Demo data seeded: 3 accounts, A-1 weekly schedule, 1 batch");
    Ok(())
}

fn demo_user(
    email: &str,
    password: &str,
    full_name: &str,
    role: &str,
    room: Option<(&str, i32, &str)>,
) -> CreateUser {
    let password_hash = hash_password(password).expect("demo password hashing");
    CreateUser {
        email: email.to_string(),
        password_hash,
        full_name: full_name.to_string(),
        role: role.to_string(),
        block: room.map(|(block, _, _)| block.to_string()),
        floor_number: room.map(|(_, floor, _)| floor),
        room_number: room.map(|(_, _, room)| room.to_string()),
        phone: None,
    }
}
