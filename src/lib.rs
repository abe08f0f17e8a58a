//! Channel3 MCP Adapter
//!
//! This library exposes the Channel3 product-search API as a set of
//! MCP (Model Context Protocol) tools: catalog search, product and brand
//! detail lookup, and brand listing.

// Domain modules
pub mod channel3;
pub mod mcp;

// Infrastructure
pub mod router;
