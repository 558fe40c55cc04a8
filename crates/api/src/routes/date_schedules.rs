//! Route definitions for the `/date-schedules` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::date_schedule;
use crate::state::AppState;

/// Routes mounted at `/date-schedules`.
///
/// ```text
/// GET    /     -> list (auth required, ?upcoming=true)
/// POST   /     -> create (admin)
/// PUT    /{id} -> update (admin)
/// DELETE /{id} -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(date_schedule::list).post(date_schedule::create))
        .route(
            "/{id}",
            put(date_schedule::update).delete(date_schedule::delete),
        )
}
