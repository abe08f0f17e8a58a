//! Transport/Auth Gate
//!
//! Extracts the caller's API key from either an `Authorization: Bearer`
//! header or an `x-api-key` header, rejecting the request with 401 before
//! any tool dispatch when neither yields a non-empty key. The key is not
//! validated further here; upstream performs real authentication.

use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Custom header accepted as an alternative to `Authorization: Bearer`
pub const API_KEY_HEADER: &str = "x-api-key";

/// Per-session immutable authentication context.
///
/// Captured once by the auth gate and passed into every handler
/// invocation through request extensions; handlers read it but never
/// mutate it.
#[derive(Debug, Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a non-empty credential (callers validate emptiness)
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, as sent to the upstream API
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Middleware: reject requests without a usable credential, otherwise
/// attach the extracted [`ApiKey`] to the request extensions.
pub async fn require_api_key(mut req: Request, next: Next) -> Response {
    match extract_api_key(req.headers()) {
        Ok(key) => {
            req.extensions_mut().insert(key);
            next.run(req).await
        }
        Err(rejection) => rejection,
    }
}

/// Locates the credential: `Authorization: Bearer <key>` first, then
/// `x-api-key: <key>`. An empty key counts as missing.
fn extract_api_key(headers: &HeaderMap) -> Result<ApiKey, Response> {
    if let Some(authorization) = headers.get(AUTHORIZATION) {
        let token = authorization
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .unwrap_or("");
        if token.is_empty() {
            return Err(unauthorized("Bearer token required"));
        }
        return Ok(ApiKey::new(token));
    }

    let key = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .unwrap_or("");
    if key.is_empty() {
        return Err(unauthorized("API Key required"));
    }
    Ok(ApiKey::new(key))
}

fn unauthorized(message: &'static str) -> Response {
    (StatusCode::UNAUTHORIZED, message).into_response()
}
