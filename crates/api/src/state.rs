use std::sync::Arc;

use washline_db::LaundryStore;
use washline_mailer::Mailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store and
/// mailer are trait objects: live deployments hold `PgStore`/`SmtpMailer`,
/// demo mode holds `FixtureStore`/`LogMailer`, tests hold
/// `FixtureStore`/`MemoryMailer`. Which pair runs is decided once at
/// startup.
#[derive(Clone)]
pub struct AppState {
    /// Data-access seam.
    pub store: Arc<dyn LaundryStore>,
    /// Email delivery seam.
    pub mailer: Arc<dyn Mailer>,
    /// Server configuration (JWT settings, timeouts, CORS origins).
    pub config: Arc<ServerConfig>,
}
