//! Domain types shared across the Washline crates.
//!
//! This crate has no dependency on the database or HTTP layers so the
//! batch state machine, role/channel constants, and error taxonomy can
//! be used from any other crate (and from tests) without pulling in
//! sqlx or axum.

pub mod activity;
pub mod batch;
pub mod channels;
pub mod error;
pub mod roles;
pub mod types;
