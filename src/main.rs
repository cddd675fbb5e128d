//! Donation Tracker Backend
//!
//! A REST backend with SQLite persistence for recording donations and
//! serving aggregate statistics, plus an embedded single-page UI.

mod api;
mod config;
mod db;
mod errors;
mod models;
mod validation;

use std::sync::Arc;

use axum::{
    response::Html,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Donation Tracker Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Open the connection pool (lazy) and bootstrap the schema
    let pool = db::connect(&config)?;
    if let Err(err) = db::run_migrations(&pool).await {
        if config.strict_startup {
            tracing::error!("Database initialization failed: {err}");
            return Err(err.into());
        }
        tracing::warn!("Database initialization failed, continuing anyway: {err}");
    }

    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Donations
        .route("/donations", get(api::list_donations))
        .route("/donations", post(api::create_donation))
        .route("/donations/{id}", get(api::get_donation))
        .route("/donations/{id}", put(api::update_donation))
        .route("/donations/{id}", delete(api::delete_donation))
        // Aggregates
        .route("/stats", get(api::get_stats))
        // Health check
        .route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .route("/", get(index_page))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// The embedded single-page UI.
async fn index_page() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}
