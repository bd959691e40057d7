//! Pet Profile API Server
//!
//! Stores pet profiles (size, age group, activity level, weight goal,
//! allergies) in MongoDB and serves them over a small JSON API.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use mongodb::bson::doc;
use mongodb::Client;
use serde::Serialize;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::MongoPetRepository;
use app::PetService;
use config::Config;
use domain::ports::PetRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pet_service: Arc<PetService<dyn PetRepository>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "running",
        message: "Pet Profile API is up and running!",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Register every route on a router bound to `state`
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/", get(health))
        .route("/health", get(health))
        // Pet profiles
        .route(
            "/api/pets",
            get(handlers::list_pets).post(handlers::create_pet),
        )
        .route("/api/pets/:id", get(handlers::get_pet))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pet_profile_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pet Profile API...");

    // Load configuration
    let config = Config::from_env();

    // The driver connects lazily; an unreachable server fails requests, not startup
    let client = Client::with_uri_str(&config.mongodb_url)
        .await
        .context("Invalid MongoDB connection string")?;
    let db = client.database(&config.database_name);

    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => tracing::info!("Connected to MongoDB database '{}'", config.database_name),
        Err(e) => tracing::warn!("MongoDB not reachable yet: {}", e),
    }

    // Create adapters
    let pet_repo: Arc<dyn PetRepository> =
        Arc::new(MongoPetRepository::new(&db, &config.pets_collection));

    // Create application services
    let state = AppState {
        pet_service: Arc::new(PetService::new(pet_repo)),
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shutting down, closing MongoDB connection");
    client.shutdown().await;

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
