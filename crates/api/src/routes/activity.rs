//! Route definitions for the `/activity` resource (admin audit trail).

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Routes mounted at `/activity`.
///
/// ```text
/// GET / -> list (admin, ?limit=&offset=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(handlers::activity::list))
}
