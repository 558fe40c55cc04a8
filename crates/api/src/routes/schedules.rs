//! Route definitions for the `/schedules` resource (weekly schedules).

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::schedule;
use crate::state::AppState;

/// Routes mounted at `/schedules`.
///
/// ```text
/// GET    /     -> list (auth required, ?block=&floor=)
/// POST   /     -> create (admin)
/// PUT    /{id} -> update (admin)
/// DELETE /{id} -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(schedule::list).post(schedule::create))
        .route("/{id}", put(schedule::update).delete(schedule::delete))
}
