// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the scoring pipeline.
//!
//! Two layers:
//!
//! 1. **Compile-time assertions** over the tuning constants. If someone edits
//!    a weight or a bucket into an inconsistent state, the crate stops
//!    building.
//! 2. **Debug assertions** on values produced while scoring. Zero-cost in
//!    release builds.
//!
//! | Contract                | Property                                      |
//! |-------------------------|-----------------------------------------------|
//! | `const _` block         | boosts > 1, buckets ordered, floor ≤ buckets  |
//! | `check_score_valid`     | finite, non-negative, at most 2 decimals      |
//! | `check_freshness_range` | factor in `[FRESHNESS_FLOOR, 1.0]`            |

use crate::scoring::core::{
    BOOSTS, CATEGORY_FILTER_BONUS, DESCRIPTION_LONG_WEIGHT, EXACT_MATCH_MULTIPLIER,
    FIELD_WEIGHTS, FRESHNESS_BUCKETS, FRESHNESS_FLOOR, FRESHNESS_UNKNOWN_AGE,
    PARTIAL_TOKEN_MULTIPLIER, PREFIX_MATCH_MULTIPLIER, SUBSTRING_MATCH_MULTIPLIER,
    WORD_MATCH_MULTIPLIER,
};

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    // Every boost must help.
    assert!(BOOSTS.featured > 1.0);
    assert!(BOOSTS.new_supplier > 1.0);
    assert!(BOOSTS.high_rating > 1.0);
    assert!(BOOSTS.verified > 1.0);
    assert!(BOOSTS.pro > 1.0);

    // Match tiers rank from strictest to loosest.
    assert!(EXACT_MATCH_MULTIPLIER > PREFIX_MATCH_MULTIPLIER);
    assert!(PREFIX_MATCH_MULTIPLIER > WORD_MATCH_MULTIPLIER);
    assert!(WORD_MATCH_MULTIPLIER > SUBSTRING_MATCH_MULTIPLIER);
    assert!(SUBSTRING_MATCH_MULTIPLIER > PARTIAL_TOKEN_MULTIPLIER);
    assert!(PARTIAL_TOKEN_MULTIPLIER > 0.0);

    // Name outweighs everything, long description is half a short one.
    assert!(FIELD_WEIGHTS.supplier_name > FIELD_WEIGHTS.package_title);
    assert!(DESCRIPTION_LONG_WEIGHT * 2.0 == FIELD_WEIGHTS.description);

    assert!(CATEGORY_FILTER_BONUS > 0.0);

    // Buckets: increasing ages, non-increasing factors, all within [floor, 1].
    let mut i = 0;
    while i < FRESHNESS_BUCKETS.len() {
        let (days, factor) = FRESHNESS_BUCKETS[i];
        assert!(days > 0.0);
        assert!(factor <= 1.0 && factor >= FRESHNESS_FLOOR);
        if i > 0 {
            let (prev_days, prev_factor) = FRESHNESS_BUCKETS[i - 1];
            assert!(days > prev_days);
            assert!(factor <= prev_factor);
        }
        i += 1;
    }
    assert!(FRESHNESS_UNKNOWN_AGE >= FRESHNESS_FLOOR && FRESHNESS_UNKNOWN_AGE <= 1.0);
};

// ============================================================================
// RUNTIME CHECKS (debug builds only)
// ============================================================================

/// Final scores are finite, non-negative, and already rounded.
#[inline]
pub fn check_score_valid(score: f64) {
    debug_assert!(score.is_finite(), "score is not finite: {}", score);
    debug_assert!(score >= 0.0, "score is negative: {}", score);
    debug_assert!(
        ((score * 100.0).round() / 100.0 - score).abs() < 1e-9,
        "score has more than 2 decimals: {}",
        score
    );
}

/// Freshness never amplifies and never drops below the floor.
#[inline]
pub fn check_freshness_range(factor: f64) {
    debug_assert!(
        (FRESHNESS_FLOOR..=1.0).contains(&factor),
        "freshness factor out of range: {}",
        factor
    );
}
