//! Route definitions for the `/batches` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::batch;
use crate::state::AppState;

/// Routes mounted at `/batches`.
///
/// ```text
/// GET  /            -> list_all (staff)
/// POST /            -> create (student)
/// GET  /mine        -> list_mine
/// GET  /{id}        -> get_by_id (owner or staff)
/// PUT  /{id}/status -> update_status (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(batch::list_all).post(batch::create))
        .route("/mine", get(batch::list_mine))
        .route("/{id}", get(batch::get_by_id))
        .route("/{id}/status", put(batch::update_status))
}
