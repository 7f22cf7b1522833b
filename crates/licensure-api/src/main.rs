use std::env;
use std::sync::Arc;

use axum::middleware as axum_mw;
use axum::routing::{delete, get, post};
use axum::Router;
use jiff::Zoned;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use licensure_registry::registry::LicenseRegistry;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bind = env::var("LICENSURE_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    // Optional seed file: a JSON array of license creation requests. An
    // unset variable means an empty registry; a set-but-unreadable one is
    // a startup error.
    let registry = match env::var("LICENSURE_SEED") {
        Ok(path) => {
            let bytes = std::fs::read(&path)?;
            let registry = LicenseRegistry::from_seed(&bytes, &Zoned::now())?;
            tracing::info!(path = %path, count = registry.len(), "registry seeded");
            registry
        }
        Err(_) => {
            tracing::info!("no seed configured, starting with an empty registry");
            LicenseRegistry::new()
        }
    };

    let state = AppState {
        registry: Arc::new(Mutex::new(registry)),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/licenses", get(routes::licenses::list_licenses))
        .route("/licenses", post(routes::licenses::create_license))
        .route("/licenses/selected", get(routes::licenses::selected_license))
        .route("/licenses/{id}", get(routes::licenses::get_license))
        .route("/licenses/{id}", delete(routes::licenses::delete_license))
        .route(
            "/licenses/{id}/initiate-renewal",
            post(routes::licenses::initiate_renewal),
        )
        .route(
            "/licenses/{id}/complete-renewal",
            post(routes::licenses::complete_renewal),
        )
        .route("/licenses/{id}/select", post(routes::licenses::select_license))
        .route("/validation/modules", get(routes::validation::list_modules))
        .route("/validation/report", get(routes::validation::validation_report))
        .layer(axum_mw::from_fn(middleware::access::access_log))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(addr = %bind, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
