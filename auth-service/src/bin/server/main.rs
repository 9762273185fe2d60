use std::sync::Arc;

use auth::Authenticator;
use auth_service::config::Config;
use auth_service::config::DirectoryBackend;
use auth_service::domain::credential::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::InMemoryUserDirectory;
use auth_service::outbound::repositories::PostgresUserDirectory;
use axum::Router;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        directory_backend = ?config.directory.backend,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(config.jwt_handler()?));

    let http_application = match config.directory.backend {
        DirectoryBackend::Memory => {
            tracing::warn!("Using in-memory user directory; records are lost on restart");
            let directory = Arc::new(InMemoryUserDirectory::new());
            let auth_service = Arc::new(AuthService::new(directory, Arc::clone(&authenticator)));
            create_router(auth_service, authenticator)
        }
        DirectoryBackend::Postgres => {
            let database_url = config.directory.database_url.as_ref().ok_or_else(|| {
                anyhow::anyhow!("directory.database_url is required for the postgres backend")
            })?;

            let pg_pool = PgPoolOptions::new()
                .max_connections(config.directory.max_connections)
                .connect(database_url.expose_secret())
                .await?;
            tracing::info!(
                max_connections = config.directory.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let directory = Arc::new(PostgresUserDirectory::new(pg_pool));
            let auth_service = Arc::new(AuthService::new(directory, Arc::clone(&authenticator)));
            create_router(auth_service, authenticator)
        }
    };

    serve(config.server.http_port, http_application).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn serve(port: u16, application: Router) -> Result<(), anyhow::Error> {
    let http_address = format!("0.0.0.0:{}", port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
