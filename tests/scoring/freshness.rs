//! Freshness decay through the public scoring path.

use crate::common::{fixed_now, make_item, make_item_aged, score};
use chrono::Duration;
use rankwell::freshness_factor;
use rankwell::scoring::freshness::age_in_days;

#[test]
fn test_boundary_table() {
    let now = fixed_now();
    let table = [
        (7, 1.0),
        (8, 0.95),
        (30, 0.95),
        (31, 0.9),
        (90, 0.9),
        (91, 0.85),
        (180, 0.85),
        (181, 0.8),
        (365, 0.8),
        (366, 0.75),
    ];
    for (days, factor) in table {
        assert_eq!(
            freshness_factor(Some(now - Duration::days(days)), now),
            factor,
            "age {} days",
            days
        );
    }
}

#[test]
fn test_exact_name_scores_thirty_times_freshness() {
    // Past the new-supplier window so no boost applies.
    for (days, expected) in [(30, 28.5), (31, 27.0), (91, 25.5), (181, 24.0), (366, 22.5)] {
        assert_eq!(score(&make_item_aged("Acme", days), "acme"), expected, "age {}", days);
    }
}

#[test]
fn test_unknown_age_uses_middle_factor() {
    assert_eq!(score(&make_item("Acme"), "acme"), 25.5);
}

#[test]
fn test_very_old_items_hit_the_floor() {
    assert_eq!(score(&make_item_aged("Acme", 5000), "acme"), 22.5);
}

#[test]
fn test_age_is_fractional() {
    let now = fixed_now();
    let created = now - Duration::hours(36);
    assert_eq!(age_in_days(created, now), 1.5);
}
