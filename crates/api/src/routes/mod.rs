pub mod activity;
pub mod auth;
pub mod batches;
pub mod date_schedules;
pub mod health;
pub mod notifications;
pub mod profile;
pub mod schedules;
pub mod templates;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                         signup (public)
/// /auth/login                          login (public)
///
/// /profile                             get, update (auth required)
///
/// /batches                             list all (staff), create (student)
/// /batches/mine                        own batches (auth required)
/// /batches/{id}                        get (owner or staff)
/// /batches/{id}/status                 advance lifecycle (staff)
///
/// /schedules                           list (auth), create (admin)
/// /schedules/{id}                      update, delete (admin)
///
/// /date-schedules                      list (auth), create (admin)
/// /date-schedules/{id}                 update, delete (admin)
///
/// /templates                           list, create (admin)
/// /templates/{id}                      delete (admin)
/// /templates/{id}/slots                list, add (admin)
/// /templates/{id}/apply                apply to block/floor (admin)
///
/// /notifications                       list (auth required)
/// /notifications/unread-count          unread count
/// /notifications/{id}/read             mark read
/// /notifications/read-all              mark all read
///
/// /activity                            audit trail (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/profile", profile::router())
        .nest("/batches", batches::router())
        .nest("/schedules", schedules::router())
        .nest("/date-schedules", date_schedules::router())
        .nest("/templates", templates::router())
        .nest("/notifications", notifications::router())
        .nest("/activity", activity::router())
}
