// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The public entrypoint: one item, one query, one number.
//!
//! ```text
//! query ──normalize──┬── empty ──▶ quality score ─────────────┐
//!                    └── text ───▶ Σ field scores + proximity ┤
//!                                                             ▼
//!                              × boosts × filter bonus × freshness ──▶ round(2)
//! ```
//!
//! Every step is a pure function of the item, the query, the filters and
//! "now". [`RelevanceScorer`] pins "now" so repeated calls (and tests) are
//! bit-for-bit reproducible; the free functions read the clock once per call.
//!
//! [`RelevanceScorer::explain`] returns every intermediate value. `score` is
//! literally `explain(..).score`, so the breakdown can never disagree with
//! the ranking.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::contracts::{check_freshness_range, check_score_valid};
use crate::scoring::boost::{applied_boosts, Boost};
use crate::scoring::core::{round_score, DESCRIPTION_LONG_WEIGHT, FIELD_WEIGHTS};
use crate::scoring::field::PreparedQuery;
use crate::scoring::filters::filter_multiplier;
use crate::scoring::freshness::freshness_factor;
use crate::scoring::proximity::proximity_bonus;
use crate::scoring::quality::QualityComponents;
use crate::types::{SearchFilters, SearchableItem};

/// Per-field text scores for a non-empty query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TextScores {
    pub name: f64,
    pub title: f64,
    pub description_short: f64,
    pub description_long: f64,
    pub category: f64,
    pub location: f64,
    pub tags: f64,
    pub amenities: f64,
    pub proximity: f64,
}

impl TextScores {
    pub fn of(item: &SearchableItem, query: &PreparedQuery) -> Self {
        Self {
            name: query.score_field(&item.name, FIELD_WEIGHTS.supplier_name),
            title: query.score_field(item.title_str(), FIELD_WEIGHTS.package_title),
            description_short: query
                .score_field(item.description_short_str(), FIELD_WEIGHTS.description),
            description_long: query.score_field(item.description_long_str(), DESCRIPTION_LONG_WEIGHT),
            category: query.score_field(item.category_str(), FIELD_WEIGHTS.category),
            location: query.score_field(item.location_str(), FIELD_WEIGHTS.location),
            tags: query.score_array(&item.tags, FIELD_WEIGHTS.tags),
            amenities: query.score_array(&item.amenities, FIELD_WEIGHTS.amenities),
            proximity: proximity_bonus(item, query.as_str()),
        }
    }

    pub fn total(&self) -> f64 {
        self.name
            + self.title
            + self.description_short
            + self.description_long
            + self.category
            + self.location
            + self.tags
            + self.amenities
            + self.proximity
    }
}

/// Where the pre-multiplier score came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BaseScore {
    /// Non-empty query: text matching.
    Text(TextScores),
    /// Empty query: reputation fallback.
    Quality(QualityComponents),
}

impl BaseScore {
    pub fn total(&self) -> f64 {
        match self {
            BaseScore::Text(scores) => scores.total(),
            BaseScore::Quality(parts) => parts.total(),
        }
    }
}

/// Every intermediate value behind one score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Normalized query.
    pub query: String,
    pub base: BaseScore,
    pub boosts: Vec<Boost>,
    pub boost_multiplier: f64,
    pub filter_multiplier: f64,
    pub freshness: f64,
    /// Final rounded score.
    pub score: f64,
}

impl ScoreBreakdown {
    /// The final score, identical to what [`RelevanceScorer::score`] returns.
    pub fn total(&self) -> f64 {
        self.score
    }

    /// Score before rounding: the base times each boost in turn, then the
    /// filter multiplier, then freshness.
    pub fn unrounded(&self) -> f64 {
        let boosted = self
            .boosts
            .iter()
            .fold(self.base.total(), |acc, boost| acc * boost.factor());
        boosted * self.filter_multiplier * self.freshness
    }
}

/// Relevance scoring against a fixed reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelevanceScorer {
    now: DateTime<Utc>,
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl RelevanceScorer {
    /// Scorer pinned to the current wall-clock time.
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Scorer pinned to `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Relevance score, rounded to 2 decimals.
    pub fn score(&self, item: &SearchableItem, query: &str, filters: &SearchFilters) -> f64 {
        self.score_prepared(item, &PreparedQuery::new(query), filters)
    }

    /// Like [`score`](Self::score), reusing an already compiled query.
    pub fn score_prepared(
        &self,
        item: &SearchableItem,
        query: &PreparedQuery,
        filters: &SearchFilters,
    ) -> f64 {
        self.explain_prepared(item, query, filters).score
    }

    pub fn explain(
        &self,
        item: &SearchableItem,
        query: &str,
        filters: &SearchFilters,
    ) -> ScoreBreakdown {
        self.explain_prepared(item, &PreparedQuery::new(query), filters)
    }

    pub fn explain_prepared(
        &self,
        item: &SearchableItem,
        query: &PreparedQuery,
        filters: &SearchFilters,
    ) -> ScoreBreakdown {
        let base = if query.is_empty() {
            BaseScore::Quality(QualityComponents::of(item))
        } else {
            BaseScore::Text(TextScores::of(item, query))
        };

        let boosts = applied_boosts(item, self.now);
        let boost_multiplier = boosts.iter().fold(1.0, |acc, boost| acc * boost.factor());
        let filter_multiplier = filter_multiplier(item, filters);
        let freshness = freshness_factor(item.created_at, self.now);
        check_freshness_range(freshness);

        let mut breakdown = ScoreBreakdown {
            query: query.as_str().to_string(),
            base,
            boosts,
            boost_multiplier,
            filter_multiplier,
            freshness,
            score: 0.0,
        };
        breakdown.score = round_score(breakdown.unrounded());
        check_score_valid(breakdown.score);

        tracing::trace!(
            item = %item.id,
            query = %breakdown.query,
            score = breakdown.score,
            "scored item"
        );
        breakdown
    }
}

/// Relevance score of `item` for `query` and `filters`, as of now.
pub fn calculate_relevance_score(item: &SearchableItem, query: &str, filters: &SearchFilters) -> f64 {
    RelevanceScorer::new().score(item, query, filters)
}

/// Relevance score as of a fixed `now`.
pub fn calculate_relevance_score_at(
    item: &SearchableItem,
    query: &str,
    filters: &SearchFilters,
    now: DateTime<Utc>,
) -> f64 {
    RelevanceScorer::at(now).score(item, query, filters)
}
