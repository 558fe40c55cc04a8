//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod activity_log;
pub mod batch;
pub mod date_schedule;
pub mod notification;
pub mod schedule;
pub mod template;
pub mod user;
