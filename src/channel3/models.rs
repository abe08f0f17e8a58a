//! Channel3 Tool Input Models
//!
//! This module contains the data structures describing the parameters of
//! the four catalog tools. They double as the outbound request bodies:
//! absent optional fields are skipped during serialization so they never
//! reach the upstream API, while `limit` and `filters` receive explicit
//! defaults before the request is sent.

use serde::{Deserialize, Serialize};

// =============================================================================
// Search
// =============================================================================

/// Returns the default result limit (20) for searches
fn default_limit() -> u32 {
    20
}

/// Input for the `search` tool.
///
/// At least one of `query`/`image_url` is expected by the upstream API;
/// this adapter does not enforce that locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchInput {
    /// Free-text search query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// URL of an image to search by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Maximum number of results (defaults to 20)
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Structured filters (defaults to an empty object)
    #[serde(default)]
    pub filters: SearchFilters,

    /// Free-text context to steer the search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Structured search filters. An empty `SearchFilters` serializes to `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchFilters {
    /// Restrict results to these brand identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_ids: Option<Vec<String>>,

    /// Restrict results to a gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Restrict results to a price range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceRange>,

    /// Restrict results to these availability statuses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Vec<AvailabilityStatus>>,
}

/// Gender filter accepted by the upstream API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

/// Price range filter; both bounds are optional
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    /// Minimum price, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,

    /// Maximum price, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

/// The fixed set of availability statuses known to the upstream API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum AvailabilityStatus {
    InStock,
    OutOfStock,
    PreOrder,
    LimitedAvailability,
    BackOrder,
    Discontinued,
    SoldOut,
    Unknown,
}

// =============================================================================
// Detail lookups and brand listing
// =============================================================================

/// Input for the `get_product_detail` tool
#[derive(Debug, Deserialize)]
pub struct ProductDetailInput {
    /// Opaque product identifier, substituted verbatim into the URL path
    pub product_id: String,
}

/// Input for the `get_brands` tool.
///
/// Each field is appended to the query string only when present; absent
/// parameters are omitted entirely, never sent as empty values.
#[derive(Debug, Default, Deserialize)]
pub struct BrandsInput {
    /// Free-text filter on brand names
    pub query: Option<String>,

    /// 1-based page number
    pub page: Option<u32>,

    /// Page size
    pub size: Option<u32>,
}

/// Input for the `get_brand_detail` tool
#[derive(Debug, Deserialize)]
pub struct BrandDetailInput {
    /// Opaque brand identifier, substituted verbatim into the URL path
    pub brand_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_input_applies_defaults() {
        let input: SearchInput =
            serde_json::from_value(json!({ "query": "red sneakers" })).unwrap();

        assert_eq!(input.limit, 20);
        assert_eq!(input.filters, SearchFilters::default());

        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(body["limit"], 20);
        assert_eq!(body["filters"], json!({}));
        // Absent optional fields must not appear in the outbound body.
        assert!(body.get("image_url").is_none());
        assert!(body.get("context").is_none());
    }

    #[test]
    fn search_input_preserves_explicit_values() {
        let input: SearchInput = serde_json::from_value(json!({
            "query": "parka",
            "limit": 5,
            "filters": {
                "gender": "female",
                "price": { "max_price": 250.0 },
                "availability": ["InStock", "PreOrder"]
            }
        }))
        .unwrap();

        assert_eq!(input.limit, 5);
        assert_eq!(input.filters.gender, Some(Gender::Female));

        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(body["filters"]["gender"], "female");
        assert_eq!(body["filters"]["price"], json!({ "max_price": 250.0 }));
        assert_eq!(
            body["filters"]["availability"],
            json!(["InStock", "PreOrder"])
        );
        assert!(body["filters"].get("brand_ids").is_none());
    }

    #[test]
    fn search_input_rejects_bad_limit() {
        let result =
            serde_json::from_value::<SearchInput>(json!({ "query": "x", "limit": -3 }));
        assert!(result.is_err());
    }

    #[test]
    fn availability_statuses_round_trip_by_name() {
        let all = json!([
            "InStock",
            "OutOfStock",
            "PreOrder",
            "LimitedAvailability",
            "BackOrder",
            "Discontinued",
            "SoldOut",
            "Unknown"
        ]);
        let parsed: Vec<AvailabilityStatus> = serde_json::from_value(all.clone()).unwrap();
        assert_eq!(parsed.len(), 8);
        assert_eq!(serde_json::to_value(&parsed).unwrap(), all);
    }

    #[test]
    fn product_detail_requires_id() {
        let result = serde_json::from_value::<ProductDetailInput>(json!({}));
        assert!(result.is_err());
    }
}
