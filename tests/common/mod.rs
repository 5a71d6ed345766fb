//! Shared test utilities and fixtures.

#![allow(dead_code)]

use rankwell::{RelevanceScorer, SearchFilters, SearchableItem};

// Re-export canonical fixtures from rankwell::testing
pub use rankwell::testing::{category_filter, fixed_now, make_item, make_item_aged, make_rich_item};

/// Scorer pinned to [`fixed_now`].
pub fn scorer() -> RelevanceScorer {
    RelevanceScorer::at(fixed_now())
}

pub fn no_filters() -> SearchFilters {
    SearchFilters::default()
}

/// Score with the pinned scorer and no filters.
pub fn score(item: &SearchableItem, query: &str) -> f64 {
    scorer().score(item, query, &no_filters())
}

/// Float comparison for unrounded intermediate values.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} but got {}",
        expected,
        actual
    );
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// A small marketplace used by ranking and highlight tests.
pub fn marketplace() -> Vec<SearchableItem> {
    let mut band = make_item_aged("Harbour Jazz Band", 45);
    band.id = "band".into();
    band.category = Some("Music".into());
    band.location = Some("Sydney".into());
    band.description_short = Some("Live jazz band for weddings and corporate events".into());
    band.tags = strings(&["jazz", "live music"]);
    band.average_rating = 4.7;
    band.review_count = 58;

    let mut venue = make_item_aged("Grand Ballroom", 200);
    venue.id = "venue".into();
    venue.category = Some("Venues".into());
    venue.location = Some("Melbourne".into());
    venue.description_long = Some("A ballroom with a stage for bands and a jazz lounge.".into());
    venue.amenities = strings(&["parking", "stage", "catering"]);
    venue.verified = true;

    let mut florist = make_item_aged("Petal & Stem", 20);
    florist.id = "florist".into();
    florist.title = Some("Wedding bouquet package".into());
    florist.category = Some("Florists".into());
    florist.location = Some("Sydney".into());
    florist.tags = strings(&["flowers", "wedding"]);
    florist.is_pro = true;

    vec![band, venue, florist]
}
