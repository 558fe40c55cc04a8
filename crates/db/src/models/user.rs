//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use washline_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    /// Role name (`"student"`, `"staff"`, `"admin"`), fixed at signup.
    pub role: String,
    /// Hostel block; only meaningful for students.
    pub block: Option<String>,
    pub floor_number: Option<i32>,
    pub room_number: Option<String>,
    pub phone: Option<String>,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub block: Option<String>,
    pub floor_number: Option<i32>,
    pub room_number: Option<String>,
    pub phone: Option<String>,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            block: user.block,
            floor_number: user.floor_number,
            room_number: user.room_number,
            phone: user.phone,
            email_notifications: user.email_notifications,
            sms_notifications: user.sms_notifications,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user. Notification preferences start at their
/// defaults (email on, SMS off).
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: String,
    pub block: Option<String>,
    pub floor_number: Option<i32>,
    pub room_number: Option<String>,
    pub phone: Option<String>,
}

/// DTO for updating a profile. All fields are optional; `None` leaves
/// the column unchanged. The role is deliberately absent -- it is fixed
/// at creation.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfile {
    pub full_name: Option<String>,
    pub block: Option<String>,
    pub floor_number: Option<i32>,
    pub room_number: Option<String>,
    pub phone: Option<String>,
    pub email_notifications: Option<bool>,
    pub sms_notifications: Option<bool>,
}
