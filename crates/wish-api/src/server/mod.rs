//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use utoipa_swagger_ui::SwaggerUi;
use wish_common::{AppConfig, AppError, JwtService};
use wish_db::{
    create_pool, PgItemRepository, PgPool, PgReservationRepository, PgWishlistRepository,
};
use wish_service::{LoggingNotifier, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_base_middleware, apply_middleware_with_config};
use crate::openapi;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health checks and API docs are mounted outside the rate limiter.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    let docs: Router<AppState> =
        SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::document()).into();
    let unlimited = apply_base_middleware(health_routes().merge(docs));

    Ok(api.merge(unlimited).with_state(state))
}

/// Wire repositories, services and the token verifier around an existing pool
pub fn build_app_state(config: AppConfig, pool: PgPool) -> Result<AppState, AppError> {
    let service_context = ServiceContextBuilder::new()
        .wishlist_repo(Arc::new(PgWishlistRepository::new(pool.clone())))
        .item_repo(Arc::new(PgItemRepository::new(pool.clone())))
        .reservation_repo(Arc::new(PgReservationRepository::new(pool.clone())))
        .notifier(Arc::new(LoggingNotifier))
        .public_base_url(config.public.base_url.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.audience.clone());

    Ok(AppState::new(service_context, jwt_service, pool, config))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = wish_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        info!("Applying database migrations...");
        wish_db::migrations::run(&pool, wish_db::migrations::DEFAULT_MIGRATIONS_DIR)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
        info!("Database migrations applied");
    }

    build_app_state(config, pool)
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, &addr).await
}
