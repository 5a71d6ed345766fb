// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted multi-field relevance scoring for marketplace search results.
//!
//! Given a candidate item (a supplier or a package), a free-text query and
//! optional filters, this crate computes a single non-negative score rounded
//! to 2 decimals. Callers sort by it. Nothing here retrieves candidates,
//! paginates, or talks to a database.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────────────────────────────────┐
//! │  types.rs   │────▶│ scoring/                                     │
//! │ (Searchable │     │  field ─ proximity ─ quality                 │
//! │  Item,      │     │  boost ─ filters ─ freshness                 │
//! │  Filters)   │     └──────────────────────┬───────────────────────┘
//! └─────────────┘                            ▼
//!                              ┌───────────────────────────┐
//!                              │       relevance.rs        │
//!                              │ (RelevanceScorer, explain)│
//!                              └──────┬─────────────┬──────┘
//!                                     ▼             ▼
//!                          ┌────────────────┐ ┌──────────┐
//!                          │ scoring/ranking│ │ cache.rs │
//!                          └────────────────┘ └──────────┘
//! ```
//!
//! `highlight` is independent of scoring: it reports which fields matched and
//! cuts snippets for the UI.
//!
//! # Usage
//!
//! ```
//! use rankwell::{calculate_relevance_score_at, SearchFilters, SearchableItem};
//! use chrono::{TimeZone, Utc};
//!
//! let item = SearchableItem {
//!     id: "s-1".into(),
//!     name: "Acme".into(),
//!     ..Default::default()
//! };
//! let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
//! let score = calculate_relevance_score_at(&item, "acme", &SearchFilters::default(), now);
//! assert_eq!(score, 25.5); // exact name match (30) × unknown-age freshness (0.85)
//! ```

pub mod cache;
pub mod config;
pub mod contracts;
pub mod error;
pub mod highlight;
pub mod input;
pub mod logging;
pub mod relevance;
pub mod scoring;
pub mod testing;
mod types;

// Re-exports for public API
pub use cache::{CacheKey, CacheStats, ScoreCache};
pub use error::{RankError, Result};
pub use highlight::{
    get_matching_fields, get_matching_snippets, MatchedField, DEFAULT_SNIPPET_CONTEXT,
};
pub use relevance::{
    calculate_relevance_score, calculate_relevance_score_at, BaseScore, RelevanceScorer,
    ScoreBreakdown, TextScores,
};
pub use scoring::boost::{apply_boosts, Boost};
pub use scoring::field::{score_array, score_field, PreparedQuery};
pub use scoring::filters::apply_filter_bonus;
pub use scoring::freshness::freshness_factor;
pub use scoring::proximity::proximity_bonus;
pub use scoring::quality::calculate_quality_score;
pub use scoring::ranking::{compare_ranked, rank_items, RankedItem};
pub use scoring::{Boosts, FieldWeights, BOOSTS, FIELD_WEIGHTS};
pub use types::{normalize_query, QueryContext, SearchFilters, SearchableItem};
