// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for relevance score invariants.
//!
//! Arbitrary items, queries and filters. Scores must be finite,
//! non-negative, rounded to 2 decimals, deterministic, and identical to the
//! total of their own breakdown.

#![no_main]

use arbitrary::Arbitrary;
use chrono::Duration;
use libfuzzer_sys::fuzz_target;
use rankwell::testing::fixed_now;
use rankwell::{RelevanceScorer, SearchFilters, SearchableItem};

#[derive(Debug, Arbitrary)]
struct Input {
    name: String,
    title: Option<String>,
    description_short: Option<String>,
    description_long: Option<String>,
    category: Option<String>,
    location: Option<String>,
    tags: Vec<String>,
    amenities: Vec<String>,
    flags: (bool, bool, bool),
    rating: f64,
    reviews: u64,
    views: u64,
    age_days: Option<i32>,
    query: String,
    filter_category: Option<String>,
    filter_location: Option<String>,
    filter_amenities: Option<Vec<String>>,
}

fuzz_target!(|input: Input| {
    // NaN ratings are not representable in item JSON
    if !input.rating.is_finite() {
        return;
    }

    let item = SearchableItem {
        id: "fuzz".to_string(),
        name: input.name,
        title: input.title,
        description_short: input.description_short,
        description_long: input.description_long,
        category: input.category,
        location: input.location,
        tags: input.tags,
        amenities: input.amenities,
        featured: input.flags.0,
        verified: input.flags.1,
        is_pro: input.flags.2,
        average_rating: input.rating,
        review_count: input.reviews,
        view_count: input.views,
        created_at: input
            .age_days
            .and_then(|days| fixed_now().checked_sub_signed(Duration::days(i64::from(days)))),
    };
    let filters = SearchFilters {
        category: input.filter_category,
        location: input.filter_location,
        amenities: input.filter_amenities,
    };

    let scorer = RelevanceScorer::at(fixed_now());
    let first = scorer.score(&item, &input.query, &filters);
    let second = scorer.score(&item, &input.query, &filters);

    assert!(first.is_finite(), "score {} is not finite", first);
    assert!(first >= 0.0, "score {} is negative", first);
    assert_eq!(first.to_bits(), second.to_bits(), "score changed between calls");
    assert_eq!(first, (first * 100.0).round() / 100.0, "score {} not rounded", first);
    assert_eq!(scorer.explain(&item, &input.query, &filters).total(), first);
});
