//! Routing module for the Channel3 MCP adapter

use crate::channel3::state::SharedState;
use axum::{body::Body, extract::Request, middleware::Next, Router};
use tower_http::cors::{Any, CorsLayer};

pub mod auth;

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        tracing::info!("REQ: {} {}", req.method(), req.uri());
        let res = next.run(req).await;
        if !res.status().is_success() {
            tracing::warn!("RES: {} (Error)", res.status());
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes. The auth gate is a route layer so unmounted paths still get
    // a plain 404 instead of a 401.
    Router::new()
        .merge(crate::mcp::routes())
        .route_layer(axum::middleware::from_fn(auth::require_api_key))
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}
