//! Channel3 Upstream Domain Module
//!
//! This module contains everything specific to the Channel3 product-search
//! API, including:
//! - Tool input models (search request, filters, pagination)
//! - The upstream HTTP client and its error type
//! - Application state management

pub mod client;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use client::{Channel3Client, UpstreamError, DEFAULT_API_BASE};
pub use state::{AppState, SharedState};
