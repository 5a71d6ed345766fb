// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Quality score: what ranks items when there is no query.
//!
//! An empty search box still has to show something sensible, so items are
//! ordered by reputation instead of text match: rating dominates (up to 50),
//! review volume and view volume add log-scaled, capped credit (up to 30 and
//! 20). Logs keep a listing with 10k views from burying one with 50 glowing
//! reviews.

use serde::Serialize;

use crate::scoring::core::{
    MAX_RATING, RATING_MULTIPLIER, REVIEW_COMPONENT_CAP, REVIEW_LOG_MULTIPLIER,
    VIEW_COMPONENT_CAP, VIEW_LOG_MULTIPLIER,
};
use crate::types::SearchableItem;

/// The three parts of a quality score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityComponents {
    pub rating: f64,
    pub reviews: f64,
    pub views: f64,
}

impl QualityComponents {
    pub fn of(item: &SearchableItem) -> Self {
        Self {
            rating: rating_component(item.average_rating),
            reviews: log_component(item.review_count, REVIEW_LOG_MULTIPLIER, REVIEW_COMPONENT_CAP),
            views: log_component(item.view_count, VIEW_LOG_MULTIPLIER, VIEW_COMPONENT_CAP),
        }
    }

    pub fn total(&self) -> f64 {
        self.rating + self.reviews + self.views
    }
}

/// Unrounded quality score, before boosts, filters and freshness.
pub fn calculate_quality_score(item: &SearchableItem) -> f64 {
    QualityComponents::of(item).total()
}

fn rating_component(rating: f64) -> f64 {
    rating.clamp(0.0, MAX_RATING) * RATING_MULTIPLIER
}

/// `min(ln(count + 1) * multiplier, cap)`
fn log_component(count: u64, multiplier: f64, cap: f64) -> f64 {
    ((count as f64 + 1.0).ln() * multiplier).min(cap)
}
