// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The things being ranked and the context they are ranked against.
//!
//! A `SearchableItem` is a read-only snapshot of a service provider or a
//! service package, handed over by whatever retrieval layer found it. Nothing
//! here is validated: every optional field defaults (empty string, zero,
//! false) so a half-filled record still scores instead of failing.
//!
//! # JSON shape
//!
//! Keys are camelCase (`averageRating`, `isPro`, `createdAt`). The two
//! description fields also accept their snake_case spelling
//! (`description_short`, `description_long`) because that is how the listing
//! service emits them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One candidate search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchableItem {
    /// Opaque identifier. Only the cache and the ranking tie-breaker look at it.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Supplier (provider) name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Package title, absent for plain supplier listings.
    pub title: Option<String>,
    #[serde(alias = "description_short")]
    pub description_short: Option<String>,
    #[serde(alias = "description_long")]
    pub description_long: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub amenities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub verified: bool,
    /// Active paid subscription.
    #[serde(deserialize_with = "null_as_default")]
    pub is_pro: bool,
    /// Mean review rating on a 0..=5 scale.
    #[serde(deserialize_with = "null_as_default")]
    pub average_rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub review_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub view_count: u64,
    pub created_at: Option<DateTime<Utc>>,
}

/// `null` reads as the field's default, the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl SearchableItem {
    /// Package title, or `""` when absent.
    #[inline]
    pub fn title_str(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    #[inline]
    pub fn description_short_str(&self) -> &str {
        self.description_short.as_deref().unwrap_or("")
    }

    #[inline]
    pub fn description_long_str(&self) -> &str {
        self.description_long.as_deref().unwrap_or("")
    }

    #[inline]
    pub fn category_str(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    #[inline]
    pub fn location_str(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}

/// Structured filters that came with the query.
///
/// Filters never exclude an item here (the retrieval layer already did that);
/// they only add a bonus when the item also satisfies them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub category: Option<String>,
    pub location: Option<String>,
    pub amenities: Option<Vec<String>>,
}

impl SearchFilters {
    /// Category filter, treating an empty string as unset.
    pub fn active_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Location filter, treating an empty string as unset.
    pub fn active_location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }

    /// Requested amenities (empty slice when unset).
    pub fn active_amenities(&self) -> &[String] {
        self.amenities.as_deref().unwrap_or(&[])
    }

    /// True when no filter would change a score.
    pub fn is_empty(&self) -> bool {
        self.active_category().is_none()
            && self.active_location().is_none()
            && self.active_amenities().is_empty()
    }
}

/// Free-text query plus filters, as supplied by the request layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryContext {
    pub query_text: String,
    pub filters: SearchFilters,
}

impl QueryContext {
    pub fn new(query_text: impl Into<String>, filters: SearchFilters) -> Self {
        Self {
            query_text: query_text.into(),
            filters,
        }
    }

    /// Query text only, no filters.
    pub fn text(query_text: impl Into<String>) -> Self {
        Self::new(query_text, SearchFilters::default())
    }
}

/// Lower-case and trim a query. This is the only normalization the engine does.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}
