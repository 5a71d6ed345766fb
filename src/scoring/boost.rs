// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boosts: multipliers from what the item is, not what it says.
//!
//! Each boost is an independent yes/no check against the item. Active boosts
//! multiply together with no cap, so a featured, verified, highly rated new
//! pro listing ends up at roughly 3.6× its text score.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

use crate::scoring::core::{BOOSTS, HIGH_RATING_THRESHOLD, NEW_SUPPLIER_DAYS};
use crate::types::SearchableItem;

/// One multiplicative boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Boost {
    Featured,
    NewSupplier,
    HighRating,
    Verified,
    Pro,
}

impl Boost {
    /// Every boost, in the order they are applied.
    pub const ALL: [Boost; 5] = [
        Boost::Featured,
        Boost::NewSupplier,
        Boost::HighRating,
        Boost::Verified,
        Boost::Pro,
    ];

    /// Multiplier from [`BOOSTS`].
    pub fn factor(self) -> f64 {
        match self {
            Boost::Featured => BOOSTS.featured,
            Boost::NewSupplier => BOOSTS.new_supplier,
            Boost::HighRating => BOOSTS.high_rating,
            Boost::Verified => BOOSTS.verified,
            Boost::Pro => BOOSTS.pro,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Boost::Featured => "featured",
            Boost::NewSupplier => "new_supplier",
            Boost::HighRating => "high_rating",
            Boost::Verified => "verified",
            Boost::Pro => "pro",
        }
    }

    /// Does this boost apply to `item` as of `now`?
    pub fn applies(self, item: &SearchableItem, now: DateTime<Utc>) -> bool {
        match self {
            Boost::Featured => item.featured,
            Boost::NewSupplier => is_new_supplier(item.created_at, now),
            Boost::HighRating => item.average_rating >= HIGH_RATING_THRESHOLD,
            Boost::Verified => item.verified,
            Boost::Pro => item.is_pro,
        }
    }
}

impl fmt::Display for Boost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Younger than [`NEW_SUPPLIER_DAYS`]. Unknown creation time means not new.
pub fn is_new_supplier(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    created_at.is_some_and(|created| now.signed_duration_since(created) < Duration::days(NEW_SUPPLIER_DAYS))
}

/// Boosts that apply to `item`, in application order.
pub fn applied_boosts(item: &SearchableItem, now: DateTime<Utc>) -> Vec<Boost> {
    Boost::ALL
        .into_iter()
        .filter(|boost| boost.applies(item, now))
        .collect()
}

/// Product of every applicable boost factor (1.0 when none apply).
pub fn boost_multiplier(item: &SearchableItem, now: DateTime<Utc>) -> f64 {
    Boost::ALL
        .into_iter()
        .filter(|boost| boost.applies(item, now))
        .fold(1.0, |acc, boost| acc * boost.factor())
}

/// Multiply `score` by each applicable boost in turn.
///
/// The running score is multiplied factor by factor, which can round
/// differently from `score * boost_multiplier(item, now)`.
pub fn apply_boosts(score: f64, item: &SearchableItem, now: DateTime<Utc>) -> f64 {
    Boost::ALL
        .into_iter()
        .filter(|boost| boost.applies(item, now))
        .fold(score, |acc, boost| acc * boost.factor())
}
