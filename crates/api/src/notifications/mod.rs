//! Notification persistence and delivery.

pub mod dispatcher;

pub use dispatcher::dispatch;
