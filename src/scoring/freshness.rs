// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Freshness decay: older listings slowly lose ground.
//!
//! A step function, not a curve. Bucket upper bounds are inclusive, so an
//! item exactly 7 days old is still "this week" and keeps its full score.
//!
//! | Age (days) | Factor |
//! |------------|--------|
//! | ≤ 7        | 1.00   |
//! | ≤ 30       | 0.95   |
//! | ≤ 90       | 0.90   |
//! | ≤ 180      | 0.85   |
//! | ≤ 365      | 0.80   |
//! | > 365      | 0.75   |
//! | unknown    | 0.85   |

use chrono::{DateTime, Utc};

use crate::scoring::core::{FRESHNESS_BUCKETS, FRESHNESS_FLOOR, FRESHNESS_UNKNOWN_AGE};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Age in fractional days. Negative for timestamps in the future.
pub fn age_in_days(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    now.signed_duration_since(created_at).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Factor for a known age.
pub fn factor_for_age(days: f64) -> f64 {
    FRESHNESS_BUCKETS
        .iter()
        .find(|(max_days, _)| days <= *max_days)
        .map_or(FRESHNESS_FLOOR, |(_, factor)| *factor)
}

/// Freshness multiplier in `[0.75, 1.0]`.
pub fn freshness_factor(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    match created_at {
        Some(created) => factor_for_age(age_in_days(created, now)),
        None => FRESHNESS_UNKNOWN_AGE,
    }
}
