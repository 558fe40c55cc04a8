//! Role name constants.
//!
//! A user's role is fixed at signup and carried in the JWT claims so the
//! API layer can enforce access without a database round trip.

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_STAFF: &str = "staff";
pub const ROLE_ADMIN: &str = "admin";

/// Whether `role` is one of the known role names.
pub fn is_valid_role(role: &str) -> bool {
    matches!(role, ROLE_STUDENT | ROLE_STAFF | ROLE_ADMIN)
}
