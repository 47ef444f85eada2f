//! Server bootstrap: wire repositories, services, middleware, and listen

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use clan_common::auth::{ChallengeService, JwtService};
use clan_common::AppConfig;
use clan_db::{
    create_pool, DatabaseConfig, PgApplicationRepository, PgAssignmentRepository,
    PgAuditLogRepository, PgGoalRepository, PgGoalSubmissionRepository,
    PgNotificationRepository, PgUploadRepository, PgUserRepository, PgUserStatsRepository,
};
use clan_service::{DiscordNotifier, ServiceContext};

use crate::routes::build_router;
use crate::state::AppState;

/// Build the service context against a live database pool
fn build_context(pool: clan_db::PgPool, config: &AppConfig) -> ServiceContext {
    ServiceContext::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgGoalRepository::new(pool.clone())),
        Arc::new(PgGoalSubmissionRepository::new(pool.clone())),
        Arc::new(PgAssignmentRepository::new(pool.clone())),
        Arc::new(PgApplicationRepository::new(pool.clone())),
        Arc::new(PgUserStatsRepository::new(pool.clone())),
        Arc::new(PgUploadRepository::new(pool.clone())),
        Arc::new(PgNotificationRepository::new(pool.clone())),
        Arc::new(PgAuditLogRepository::new(pool)),
        Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry)),
        Arc::new(ChallengeService::new(
            &config.jwt.secret,
            config.challenge.ttl_seconds,
        )),
        Arc::new(DiscordNotifier::new(config.discord.webhook_url.clone())),
    )
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(Any);

    if config.cors.allowed_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}

/// Run the HTTP server until shutdown
pub async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db_config = DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..DatabaseConfig::default()
    };
    let pool = create_pool(&db_config).await?;

    clan_db::run_migrations(&pool).await?;
    info!("Database migrations applied");

    let state = AppState::new(build_context(pool, &config));

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors_layer(&config));

    let address = config.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "API server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
