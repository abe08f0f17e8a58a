//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Name of the catalog search tool
pub const SEARCH_TOOL_NAME: &str = "search";
/// Name of the product detail tool
pub const PRODUCT_DETAIL_TOOL_NAME: &str = "get_product_detail";
/// Name of the brand listing tool
pub const BRANDS_TOOL_NAME: &str = "get_brands";
/// Name of the brand detail tool
pub const BRAND_DETAIL_TOOL_NAME: &str = "get_brand_detail";
/// Server identifier
pub const SERVER_NAME: &str = "channel3-mcp";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// =============================================================================
// Tool Set
// =============================================================================

/// The closed set of tools exposed by this server.
///
/// The set is fixed at build time; dispatch happens by matching the
/// inbound tool name onto one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    Search,
    GetProductDetail,
    GetBrands,
    GetBrandDetail,
}

impl ToolName {
    /// Resolves an inbound tool name, or `None` for unknown tools
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            SEARCH_TOOL_NAME => Some(Self::Search),
            PRODUCT_DETAIL_TOOL_NAME => Some(Self::GetProductDetail),
            BRANDS_TOOL_NAME => Some(Self::GetBrands),
            BRAND_DETAIL_TOOL_NAME => Some(Self::GetBrandDetail),
            _ => None,
        }
    }

    /// The wire name of this tool
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Search => SEARCH_TOOL_NAME,
            Self::GetProductDetail => PRODUCT_DETAIL_TOOL_NAME,
            Self::GetBrands => BRANDS_TOOL_NAME,
            Self::GetBrandDetail => BRAND_DETAIL_TOOL_NAME,
        }
    }
}

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}
