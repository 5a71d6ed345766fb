// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The numbers behind marketplace ranking.
//!
//! Everything that decides an item's score lives here as a constant: field
//! weights, match-tier multipliers, boosts, filter bonuses and freshness
//! buckets. Nothing mutates them at runtime. If ranking looks wrong, this is
//! the first file to read; `contracts.rs` holds the compile-time checks that
//! keep the tables internally consistent.
//!
//! # Field weights
//!
//! | Field              | Weight |
//! |--------------------|--------|
//! | supplier name      | 10     |
//! | package title      | 8      |
//! | tags (per element) | 5      |
//! | category           | 4      |
//! | short description  | 3      |
//! | location           | 3      |
//! | amenities (each)   | 2      |
//! | long description   | 1.5 (derived: half of description) |
//!
//! # Boosts (multiplicative, uncapped)
//!
//! featured ×1.5, new supplier ×1.3, high rating ×1.4, verified ×1.2, pro ×1.1

use serde::Serialize;

// =============================================================================
// FIELD WEIGHTS
// =============================================================================

/// Per-field base weights for text matching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldWeights {
    pub supplier_name: f64,
    pub package_title: f64,
    pub tags: f64,
    pub category: f64,
    pub description: f64,
    pub location: f64,
    pub amenities: f64,
}

/// The field weight table.
pub const FIELD_WEIGHTS: FieldWeights = FieldWeights {
    supplier_name: 10.0,
    package_title: 8.0,
    tags: 5.0,
    category: 4.0,
    description: 3.0,
    location: 3.0,
    amenities: 2.0,
};

/// Share of the description weight given to the long description.
pub const DESCRIPTION_LONG_RATIO: f64 = 0.5;

/// Weight of `description_long`. Derived, so it follows the base description weight.
pub const DESCRIPTION_LONG_WEIGHT: f64 = FIELD_WEIGHTS.description * DESCRIPTION_LONG_RATIO;

// =============================================================================
// MATCH TIERS
// =============================================================================
// Exact match short-circuits. The other tiers stack: a field that starts with
// the query usually also contains it as a word and as a substring.

/// Whole trimmed field equals the query.
pub const EXACT_MATCH_MULTIPLIER: f64 = 3.0;

/// Field starts with the query.
pub const PREFIX_MATCH_MULTIPLIER: f64 = 2.0;

/// Query appears as a whole word.
pub const WORD_MATCH_MULTIPLIER: f64 = 1.5;

/// Query appears anywhere.
pub const SUBSTRING_MATCH_MULTIPLIER: f64 = 1.0;

/// Scaled by the fraction of query tokens found in the field (multi-token queries only).
pub const PARTIAL_TOKEN_MULTIPLIER: f64 = 0.5;

/// Minimum number of query tokens before partial-token and proximity scoring kick in.
pub const MIN_MULTI_TOKEN_QUERY: usize = 2;

// =============================================================================
// PROXIMITY
// =============================================================================

/// Window width in characters.
pub const PROXIMITY_WINDOW_CHARS: usize = 50;

/// Flat bonus when every query token fits inside one window.
pub const PROXIMITY_BONUS: f64 = 5.0;

// =============================================================================
// QUALITY (EMPTY QUERY FALLBACK)
// =============================================================================

pub const MAX_RATING: f64 = 5.0;
pub const RATING_MULTIPLIER: f64 = 10.0;
pub const REVIEW_LOG_MULTIPLIER: f64 = 5.0;
pub const REVIEW_COMPONENT_CAP: f64 = 30.0;
pub const VIEW_LOG_MULTIPLIER: f64 = 3.0;
pub const VIEW_COMPONENT_CAP: f64 = 20.0;

// =============================================================================
// BOOSTS
// =============================================================================

/// Multiplicative boost factors keyed to intrinsic item properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Boosts {
    pub featured: f64,
    pub new_supplier: f64,
    pub high_rating: f64,
    pub verified: f64,
    pub pro: f64,
}

/// The boost table.
pub const BOOSTS: Boosts = Boosts {
    featured: 1.5,
    new_supplier: 1.3,
    high_rating: 1.4,
    verified: 1.2,
    pro: 1.1,
};

/// Items younger than this many days get the new-supplier boost.
pub const NEW_SUPPLIER_DAYS: i64 = 30;

/// Ratings at or above this get the high-rating boost.
pub const HIGH_RATING_THRESHOLD: f64 = 4.5;

// =============================================================================
// FILTER BONUSES
// =============================================================================

pub const CATEGORY_FILTER_BONUS: f64 = 0.10;
pub const LOCATION_FILTER_BONUS: f64 = 0.10;
/// Per matched amenity.
pub const AMENITY_FILTER_BONUS: f64 = 0.05;

// =============================================================================
// FRESHNESS
// =============================================================================

/// `(max age in days, factor)`, inclusive upper bounds, youngest first.
pub const FRESHNESS_BUCKETS: [(f64, f64); 5] = [
    (7.0, 1.0),
    (30.0, 0.95),
    (90.0, 0.90),
    (180.0, 0.85),
    (365.0, 0.80),
];

/// Factor for anything older than the last bucket.
pub const FRESHNESS_FLOOR: f64 = 0.75;

/// Factor when the creation time is unknown. Not tied to any bucket.
pub const FRESHNESS_UNKNOWN_AGE: f64 = 0.85;

// =============================================================================
// OUTPUT
// =============================================================================

/// Final scores are rounded to this many decimal places.
pub const SCORE_DECIMALS: i32 = 2;

/// Round a raw score to [`SCORE_DECIMALS`] places.
#[inline]
pub fn round_score(score: f64) -> f64 {
    let scale = 10f64.powi(SCORE_DECIMALS);
    (score * scale).round() / scale
}
