use axum_helpers::server::health_router;
use axum_helpers::JwtAuth;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_events::{EventService, EventStore};
use domain_universities::{StaticUniversitySource, SystemClock, UniversityCache};
use domain_users::{InMemoryUserRepository, UserService};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    // Stateless JWT authentication
    let jwt_auth = JwtAuth::new(&config.jwt);

    // Domain services over the in-memory stores
    let user_service = UserService::new(InMemoryUserRepository::new(), jwt_auth.clone());
    let event_service = EventService::new(EventStore::in_memory());

    // University reference cache: one explicit cache object, built here,
    // shared by reference with the handlers
    let university_cache = Arc::new(UniversityCache::new(
        Arc::new(StaticUniversitySource::builtin()),
        Arc::new(SystemClock),
        config.cache.ttl,
    ));

    let state = AppState {
        config,
        jwt_auth,
        user_service,
        event_service,
        university_cache,
    };

    // Build router with API routes (pass reference, not ownership!)
    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoints into the app
    // - /health: liveness check with app name/version
    // - /ready: readiness check exercising the actual dependencies
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::ready_router(state.clone()));

    info!("Starting campus API with graceful shutdown (30s timeout)");

    // Production-ready server with graceful shutdown and cleanup
    axum_helpers::create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30), // 30s graceful shutdown timeout
        async move {
            // In-memory stores need no teardown; this is where real
            // store connections would be closed.
            info!("Shutting down: no external connections to close");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Campus API shutdown complete");
    Ok(())
}
