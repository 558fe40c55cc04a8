use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use washline_api::config::ServerConfig;
use washline_api::router::build_app_router;
use washline_api::state::AppState;
use washline_api::demo;
use washline_db::{FixtureStore, LaundryStore, PgStore};
use washline_mailer::{DisabledMailer, EmailConfig, LogMailer, Mailer, SmtpMailer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "washline_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Storage: live PostgreSQL or in-memory demo mode ---
    let store: Arc<dyn LaundryStore> = match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = washline_db::create_pool(&database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            washline_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            washline_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgStore::new(pool))
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; running in demo mode with in-memory data");
            let store = Arc::new(FixtureStore::new());
            demo::seed(store.as_ref())
                .await
                .expect("Failed to seed demo data");
            for (email, password, role) in demo::DEMO_ACCOUNTS {
                tracing::info!(email, password, role, "Demo account available");
            }
            store
        }
    };
    let demo_mode = std::env::var("DATABASE_URL").is_err();

    // --- Email delivery ---
    let mailer: Arc<dyn Mailer> = if demo_mode {
        tracing::info!("Demo mode: emails will be logged, not sent");
        Arc::new(LogMailer)
    } else {
        match EmailConfig::from_env() {
            Some(email_config) => {
                tracing::info!(host = %email_config.smtp_host, "SMTP email delivery configured");
                Arc::new(SmtpMailer::new(email_config))
            }
            None => {
                tracing::warn!("SMTP_HOST not set; notifications will be saved but not emailed");
                Arc::new(DisabledMailer)
            }
        }
    };

    // --- App state ---
    let state = AppState {
        store,
        mailer,
        config: Arc::new(config.clone()),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
