//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol handlers for the
//! Channel3 adapter. It exports `handle_tool_call` publicly to make it
//! accessible for tests.

use super::{helpers::*, models::*};
use crate::channel3::{
    models::{BrandDetailInput, BrandsInput, ProductDetailInput, SearchInput},
    state::{AppState, SharedState},
    UpstreamError,
};
use crate::router::auth::ApiKey;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};

/// Creates routes for MCP-related operations.
///
/// The streamable endpoint lives at `/`; the legacy SSE binding pairs
/// `GET /sse` with the `POST /messages` companion endpoint.
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/sse", get(handle_mcp_sse))
        .route("/messages", post(handle_mcp))
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /messages\n\n",
    )
}

/// Endpoint: POST / and POST /messages
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    Extension(api_key): Extension<ApiKey>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    // Parse JSON-RPC Request (POST)
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!("JSON parse error: {}", e.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, -32700, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    tracing::debug!(method = method_name, ?id, "MCP call");

    // Dispatch Method
    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(json!({}));

            match handle_tool_call(&state, &api_key, tool_name, args).await {
                Ok(result) => rpc_success(id, result),
                Err(msg) => rpc_error(id, -32602, msg), // Unknown tool or invalid params
            }
        }
        "ping" => rpc_success(id, json!({})), // Optional but good for health checks
        _ => {
            tracing::warn!(method = method_name, "unknown method");
            rpc_error(id, -32601, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": SEARCH_TOOL_NAME,
                "title": "Search products",
                "description": "Searches the product catalog by free-text query and/or \
                    image URL, with optional structured filters.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Free-text search query"
                        },
                        "image_url": {
                            "type": "string",
                            "description": "URL of an image to search by"
                        },
                        "limit": {
                            "type": "integer",
                            "minimum": 1,
                            "default": 20,
                            "description": "Maximum number of results"
                        },
                        "filters": {
                            "type": "object",
                            "default": {},
                            "properties": {
                                "brand_ids": {
                                    "type": "array",
                                    "items": { "type": "string" }
                                },
                                "gender": {
                                    "type": "string",
                                    "enum": ["male", "female", "unisex"]
                                },
                                "price": {
                                    "type": "object",
                                    "properties": {
                                        "min_price": { "type": "number" },
                                        "max_price": { "type": "number" }
                                    },
                                    "additionalProperties": false
                                },
                                "availability": {
                                    "type": "array",
                                    "items": {
                                        "type": "string",
                                        "enum": [
                                            "InStock",
                                            "OutOfStock",
                                            "PreOrder",
                                            "LimitedAvailability",
                                            "BackOrder",
                                            "Discontinued",
                                            "SoldOut",
                                            "Unknown"
                                        ]
                                    }
                                }
                            },
                            "additionalProperties": false
                        },
                        "context": {
                            "type": "string",
                            "description": "Free-text context to steer the search"
                        }
                    },
                    "additionalProperties": false
                }
            },
            {
                "name": PRODUCT_DETAIL_TOOL_NAME,
                "title": "Get product detail",
                "description": "Fetches detailed information about a single product.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "product_id": {
                            "type": "string",
                            "description": "Product identifier"
                        }
                    },
                    "required": ["product_id"],
                    "additionalProperties": false
                }
            },
            {
                "name": BRANDS_TOOL_NAME,
                "title": "List brands",
                "description": "Lists brands available in the catalog, optionally \
                    filtered by name and paginated.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Free-text filter on brand names"
                        },
                        "page": {
                            "type": "integer",
                            "minimum": 1,
                            "description": "1-based page number"
                        },
                        "size": {
                            "type": "integer",
                            "minimum": 1,
                            "description": "Page size"
                        }
                    },
                    "additionalProperties": false
                }
            },
            {
                "name": BRAND_DETAIL_TOOL_NAME,
                "title": "Get brand detail",
                "description": "Fetches detailed information about a single brand.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "brand_id": {
                            "type": "string",
                            "description": "Brand identifier"
                        }
                    },
                    "required": ["brand_id"],
                    "additionalProperties": false
                }
            }
        ]
    })
}

/// Handles `tools/call` request.
///
/// `Err` is reserved for protocol-level failures (unknown tool, invalid
/// arguments) and becomes a JSON-RPC error; upstream failures come back
/// as `Ok` carrying an error-flagged tool result envelope.
pub async fn handle_tool_call(
    state: &AppState,
    api_key: &ApiKey,
    name: &str,
    args: Value,
) -> Result<Value, String> {
    let tool = ToolName::from_name(name).ok_or_else(|| format!("Unknown tool: {name}"))?;
    match tool {
        ToolName::Search => handle_search_tool(state, api_key, args).await,
        ToolName::GetProductDetail => handle_product_detail_tool(state, api_key, args).await,
        ToolName::GetBrands => handle_brands_tool(state, api_key, args).await,
        ToolName::GetBrandDetail => handle_brand_detail_tool(state, api_key, args).await,
    }
}

/// Handles the search tool functionality
async fn handle_search_tool(
    state: &AppState,
    api_key: &ApiKey,
    args: Value,
) -> Result<Value, String> {
    let input: SearchInput = parse_arguments(args)?;
    Ok(tool_outcome(state.upstream.search(api_key, &input).await))
}

/// Handles the get_product_detail tool functionality
async fn handle_product_detail_tool(
    state: &AppState,
    api_key: &ApiKey,
    args: Value,
) -> Result<Value, String> {
    let input: ProductDetailInput = parse_arguments(args)?;
    Ok(tool_outcome(
        state
            .upstream
            .product_detail(api_key, &input.product_id)
            .await,
    ))
}

/// Handles the get_brands tool functionality
async fn handle_brands_tool(
    state: &AppState,
    api_key: &ApiKey,
    args: Value,
) -> Result<Value, String> {
    let input: BrandsInput = parse_arguments(args)?;
    Ok(tool_outcome(state.upstream.brands(api_key, &input).await))
}

/// Handles the get_brand_detail tool functionality
async fn handle_brand_detail_tool(
    state: &AppState,
    api_key: &ApiKey,
    args: Value,
) -> Result<Value, String> {
    let input: BrandDetailInput = parse_arguments(args)?;
    Ok(tool_outcome(
        state.upstream.brand_detail(api_key, &input.brand_id).await,
    ))
}

/// Validates tool arguments against their typed input model
fn parse_arguments<T: serde::de::DeserializeOwned>(args: Value) -> Result<T, String> {
    serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {e}"))
}

/// Wraps an upstream call outcome into the tool result envelope
fn tool_outcome(result: Result<String, UpstreamError>) -> Value {
    match result {
        Ok(body) => tool_text(body),
        Err(err) => {
            tracing::warn!(error = %err, "tool call failed");
            tool_error(err.to_string())
        }
    }
}
