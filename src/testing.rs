// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, benches and
//! fuzz targets.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::types::{SearchFilters, SearchableItem};

/// Reference "now" for deterministic tests: 2025-06-01T00:00:00Z.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// An item with only a name (and an id derived from it). Unknown age, no
/// flags, no reputation.
pub fn make_item(name: &str) -> SearchableItem {
    SearchableItem {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        ..Default::default()
    }
}

/// [`make_item`] created `days` days before [`fixed_now`].
pub fn make_item_aged(name: &str, days: i64) -> SearchableItem {
    SearchableItem {
        created_at: Some(fixed_now() - Duration::days(days)),
        ..make_item(name)
    }
}

/// A fully populated listing, handy for benches and smoke tests.
pub fn make_rich_item(index: usize) -> SearchableItem {
    SearchableItem {
        id: format!("item-{}", index),
        name: format!("Harbour Events {}", index),
        title: Some("Wedding reception package".to_string()),
        description_short: Some("Waterfront venue with catering and live music".to_string()),
        description_long: Some(
            "Our harbour venue hosts weddings, corporate dinners and birthday parties. \
             In-house catering, a jazz trio on request and parking for 80 cars."
                .to_string(),
        ),
        category: Some("Venues".to_string()),
        location: Some("Sydney".to_string()),
        tags: vec!["wedding".to_string(), "waterfront".to_string(), "jazz".to_string()],
        amenities: vec!["parking".to_string(), "catering".to_string(), "wifi".to_string()],
        featured: index % 5 == 0,
        verified: index % 2 == 0,
        is_pro: index % 3 == 0,
        average_rating: 3.5 + (index % 4) as f64 * 0.5,
        review_count: (index * 7 % 300) as u64,
        view_count: (index * 131 % 10_000) as u64,
        created_at: Some(fixed_now() - Duration::days((index % 500) as i64)),
    }
}

/// Filters with just a category.
pub fn category_filter(category: &str) -> SearchFilters {
    SearchFilters {
        category: Some(category.to_string()),
        ..Default::default()
    }
}
