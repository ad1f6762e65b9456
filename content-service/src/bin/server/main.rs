use std::sync::Arc;

use auth::Authenticator;
use auth::SystemClock;
use content_service::config::Config;
use content_service::inbound::http::router::create_router;
use content_service::inbound::http::router::AppState;
use content_service::outbound::repositories::InMemoryStore;
use content_service::outbound::repositories::PostgresPostRepository;
use content_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "content_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "content-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        query_timeout_secs = config.database.query_timeout_secs,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        Arc::new(SystemClock),
    ));
    let state = build_state(&config, authenticator).await?;

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state, config.server.request_timeout());
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");
    Ok(())
}

/// Pick the record store named by `database.url` and wire the services over it.
async fn build_state(
    config: &Config,
    authenticator: Arc<Authenticator>,
) -> Result<AppState, anyhow::Error> {
    let token_ttl = config.jwt.token_ttl();

    if config.database.is_memory() {
        tracing::warn!(database = "memory", "Using in-process store, data is not durable");
        let store = Arc::new(InMemoryStore::new());
        return Ok(AppState::from_repositories(
            Arc::clone(&store),
            store,
            authenticator,
            token_ttl,
        ));
    }

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let query_timeout = config.database.query_timeout();
    Ok(AppState::from_repositories(
        Arc::new(PostgresUserRepository::new(pg_pool.clone(), query_timeout)),
        Arc::new(PostgresPostRepository::new(pg_pool, query_timeout)),
        authenticator,
        token_ttl,
    ))
}
