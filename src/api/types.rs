//! Search API response type definitions.

use serde::{Deserialize, Serialize};

/// Top-level search response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub meta: Meta,
    /// Result items, in the order the API returned them.
    #[serde(default)]
    pub data: Vec<Item>,
    #[serde(default)]
    pub links: Links,
}

/// Search metadata. Pagination fields are stored but not followed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub cursor: String,
    #[serde(default)]
    pub total_hits: u64,
    #[serde(default)]
    pub allowed_orders: Vec<String>,
    #[serde(default)]
    pub days_back: i64,
}

/// A single search hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub id: String,
}

/// Pagination links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default)]
    pub self_link: String,
    #[serde(default)]
    pub next: String,
}

impl SearchResults {
    /// Number of items in this page of results.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
