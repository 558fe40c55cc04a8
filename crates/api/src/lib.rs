//! Washline API server library.
//!
//! Exposes the core building blocks (config, state, error handling,
//! routes, the batch lifecycle controller, and the notification
//! dispatcher) so integration tests and the binary entrypoint can both
//! access them.

pub mod activity;
pub mod auth;
pub mod config;
pub mod demo;
pub mod error;
pub mod handlers;
pub mod lifecycle;
pub mod middleware;
pub mod notifications;
pub mod router;
pub mod routes;
pub mod state;
