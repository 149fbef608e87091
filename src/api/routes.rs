//! # Router
//!
//! Combines the poem endpoints and the health probe into one axum router
//! over a shared `AppState`, and runs the HTTP server.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;
use crate::observability::Logger;
use crate::store::Collection;

use super::handlers::{self, AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create the poem routes
pub fn poem_routes<C: Collection + 'static>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        .route("/poem", post(handlers::create_poem::<C>))
        .route("/poem/{id}", get(handlers::get_poem::<C>))
        .route("/poem/{id}", put(handlers::update_poem::<C>))
        .route("/poem/{id}", delete(handlers::delete_poem::<C>))
        .route("/poems", get(handlers::list_poems::<C>))
        .with_state(state)
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Build the CORS layer from the configured origin list
fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_origins.is_empty() {
        // No origins configured: permissive
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Build the combined router with all endpoints
pub fn router<C: Collection + 'static>(state: Arc<AppState<C>>) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .merge(health_routes())
        .merge(poem_routes(state))
        .layer(cors)
}

/// Start the HTTP server (async)
///
/// Runs until the process is stopped or the listener fails.
pub async fn serve<C: Collection + 'static>(state: Arc<AppState<C>>) -> Result<(), std::io::Error> {
    let addr = state.config.socket_addr();
    let router = router(state);

    println!("Starting poemario HTTP server on {}", addr);
    println!("Health check: http://{}/health", addr);
    println!("Endpoints:");
    println!("  GET    /poems      - paginated listing");
    println!("  GET    /poem/{{id}}  - fetch one poem");
    println!("  POST   /poem       - create a poem (secret required)");
    println!("  PUT    /poem/{{id}}  - update a poem (secret required)");
    println!("  DELETE /poem/{{id}}  - delete a poem (secret required)");

    let listener = TcpListener::bind(addr.as_str()).await?;
    Logger::info("SERVER_STARTED", &[("addr", &addr)]);

    axum::serve(listener, router).await?;

    Ok(())
}
