//! Application State Management
//!
//! The shared state is deliberately small: one upstream client wrapping a
//! reqwest connection pool and the API base URL. Per-session credentials
//! never live here; they travel with each request as an
//! [`ApiKey`](crate::router::auth::ApiKey) context value.

use super::client::Channel3Client;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state holding the upstream client
pub struct AppState {
    /// Client for the Channel3 product-search API
    pub upstream: Channel3Client,
}

impl AppState {
    /// Creates a new AppState targeting the given API base URL
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            upstream: Channel3Client::new(api_base),
        }
    }
}
