// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filter bonus: a small lift for items that also satisfy active filters.
//!
//! Bonuses are additive percentages on one multiplier, not compounded:
//! category +10%, location +10%, +5% per requested amenity the item has.

use crate::scoring::core::{AMENITY_FILTER_BONUS, CATEGORY_FILTER_BONUS, LOCATION_FILTER_BONUS};
use crate::types::{SearchFilters, SearchableItem};

/// `1.0` plus every bonus the item earns.
pub fn filter_multiplier(item: &SearchableItem, filters: &SearchFilters) -> f64 {
    let mut multiplier = 1.0;

    if filters
        .active_category()
        .is_some_and(|category| item.category.as_deref() == Some(category))
    {
        multiplier += CATEGORY_FILTER_BONUS;
    }

    if let Some(location) = filters.active_location() {
        if item
            .location_str()
            .to_lowercase()
            .contains(&location.to_lowercase())
        {
            multiplier += LOCATION_FILTER_BONUS;
        }
    }

    let amenity_matches = matching_amenities(item, filters);
    if amenity_matches > 0 {
        multiplier += AMENITY_FILTER_BONUS * amenity_matches as f64;
    }

    multiplier
}

/// Number of requested amenities the item lists (exact string match).
pub fn matching_amenities(item: &SearchableItem, filters: &SearchFilters) -> usize {
    filters
        .active_amenities()
        .iter()
        .filter(|wanted| item.amenities.contains(wanted))
        .count()
}

/// `score × filter_multiplier(item, filters)`.
pub fn apply_filter_bonus(score: f64, item: &SearchableItem, filters: &SearchFilters) -> f64 {
    score * filter_multiplier(item, filters)
}
