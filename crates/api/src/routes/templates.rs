//! Route definitions for the `/templates` resource (schedule templates).
//!
//! All endpoints are admin-only.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::template;
use crate::state::AppState;

/// Routes mounted at `/templates`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// DELETE /{id}        -> delete
/// GET    /{id}/slots  -> list_slots
/// POST   /{id}/slots  -> add_slot
/// POST   /{id}/apply  -> apply
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(template::list).post(template::create))
        .route("/{id}", delete(template::delete))
        .route(
            "/{id}/slots",
            get(template::list_slots).post(template::add_slot),
        )
        .route("/{id}/apply", post(template::apply))
}
