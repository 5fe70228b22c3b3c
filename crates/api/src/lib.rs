//! # Planner API
//!
//! The API crate provides the web server for the Planner scheduling service.
//! It exposes JSON endpoints for users, schedules and everything planned
//! inside a schedule: teachers, classrooms, groups, lessons and their blocks.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate HTTP requests into service calls
//! - **Services**: Validate input, resolve references within the caller's scope, write
//! - **Middleware**: Authentication and error mapping
//! - **Config**: Environment and application configuration
//!
//! The API uses Axum as the web framework. Storage goes through the
//! repository traits of `planner-db`, so handlers can be tested against a mock store.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// Validation and orchestration for every entity
pub mod services;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use planner_core::settings::PolicySettings;
use planner_db::{DbPool, PgStore, repositories::Store};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```rust,ignore
/// let state = Arc::new(ApiState {
///     store: Arc::new(PgStore::new(pool)),
///     policy: PolicySettings::default(),
///     session_ttl: chrono::Duration::minutes(300),
/// });
/// let app = planner_api::app(state);
/// ```
pub struct ApiState {
    /// Every repository the services need
    pub store: Arc<dyn Store>,
    /// Character and password rules
    pub policy: PolicySettings,
    /// Lifetime of a session issued at login
    pub session_ttl: chrono::Duration,
}

/// Builds the router with every endpoint and request tracing.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Login and logout
        .merge(routes::auth::routes())
        // Registration and account management
        .merge(routes::user::routes())
        // Schedules, settings and nested lists
        .merge(routes::schedule::routes())
        // Everything planned inside a schedule
        .merge(routes::resources::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the API server with the provided configuration and database connection
///
/// Sets up logging, builds the router on a Postgres-backed store and serves
/// HTTP until the process is stopped.
///
/// # Example
///
/// ```rust,ignore
/// let config = ApiConfig::from_env()?;
/// let pool = planner_db::create_pool(&config.database_url).await?;
/// start_server(config, pool).await?;
/// ```
pub async fn start_server(config: config::ApiConfig, pool: DbPool) -> Result<()> {
    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState {
        store: Arc::new(PgStore::new(pool)),
        policy: config.policy.clone(),
        session_ttl: chrono::Duration::minutes(config.session_ttl_minutes),
    });

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {}", origin);
                    None
                }
            })
            .collect::<Vec<axum::http::HeaderValue>>();

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PATCH,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(allowed)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Requests running past the timeout are dropped along with their pending queries
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(axum::error_handling::HandleErrorLayer::new(|_: tower::BoxError| async {
                axum::http::StatusCode::REQUEST_TIMEOUT
            }))
            .timeout(std::time::Duration::from_secs(config.request_timeout))
            .into_inner(),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
