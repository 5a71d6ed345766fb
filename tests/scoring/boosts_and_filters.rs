//! Multiplicative boosts and the filter bonus.

use crate::common::{
    assert_close, category_filter, fixed_now, make_item, make_item_aged, score, scorer, strings,
};
use chrono::Duration;
use rankwell::scoring::boost::{applied_boosts, boost_multiplier, is_new_supplier};
use rankwell::scoring::filters::filter_multiplier;
use rankwell::scoring::round_score;
use rankwell::{apply_boosts, apply_filter_bonus, Boost, SearchFilters, BOOSTS};

#[test]
fn test_no_boosts_is_identity() {
    let item = make_item_aged("Acme", 400);
    assert!(applied_boosts(&item, fixed_now()).is_empty());
    assert_eq!(apply_boosts(12.5, &item, fixed_now()), 12.5);
}

#[test]
fn test_featured_boost() {
    let mut item = make_item_aged("Acme", 400);
    item.featured = true;
    assert_eq!(score(&item, "acme"), 33.75); // 30 × 1.5 × 0.75
}

#[test]
fn test_all_boosts_compound() {
    let mut item = make_item_aged("Acme", 10);
    item.featured = true;
    item.verified = true;
    item.is_pro = true;
    item.average_rating = 4.8;
    assert_eq!(applied_boosts(&item, fixed_now()), Boost::ALL.to_vec());
    let expected = 1.5 * 1.3 * 1.4 * 1.2 * 1.1;
    assert_close(boost_multiplier(&item, fixed_now()), expected);
    assert_close(apply_boosts(10.0, &item, fixed_now()), 10.0 * expected);
}

#[test]
fn test_boosts_apply_one_factor_at_a_time() {
    let mut item = make_item_aged("Acme", 10);
    item.featured = true;
    item.verified = true;
    item.is_pro = true;
    item.average_rating = 4.8;
    let stepwise = 750.0 * 1.5 * 1.3 * 1.4 * 1.2 * 1.1;
    assert_eq!(apply_boosts(750.0, &item, fixed_now()), stepwise);
    assert_eq!(round_score(apply_boosts(750.0, &item, fixed_now()) * 0.85), 2297.29);
}

#[test]
fn test_high_rating_threshold_is_inclusive() {
    let mut item = make_item("Acme");
    item.average_rating = 4.5;
    assert_eq!(boost_multiplier(&item, fixed_now()), BOOSTS.high_rating);
    item.average_rating = 4.49;
    assert_eq!(boost_multiplier(&item, fixed_now()), 1.0);
}

#[test]
fn test_new_supplier_window() {
    let now = fixed_now();
    assert!(is_new_supplier(Some(now - Duration::days(29)), now));
    assert!(!is_new_supplier(Some(now - Duration::days(30)), now));
    assert!(!is_new_supplier(None, now));
    // future timestamps count as brand new
    assert!(is_new_supplier(Some(now + Duration::days(3)), now));
}

#[test]
fn test_category_filter_is_exact() {
    let mut item = make_item("Hall");
    item.category = Some("Venues".into());
    assert_close(filter_multiplier(&item, &category_filter("Venues")), 1.1);
    assert_eq!(filter_multiplier(&item, &category_filter("venues")), 1.0);
    assert_eq!(filter_multiplier(&item, &category_filter("")), 1.0);
}

#[test]
fn test_location_filter_is_case_insensitive_substring() {
    let mut item = make_item("Hall");
    item.location = Some("North Sydney, NSW".into());
    let filters = SearchFilters {
        location: Some("sydney".into()),
        ..Default::default()
    };
    assert_close(filter_multiplier(&item, &filters), 1.1);
}

#[test]
fn test_amenity_bonus_per_match() {
    let mut item = make_item("Hall");
    item.amenities = strings(&["parking", "wifi", "stage"]);
    let filters = SearchFilters {
        amenities: Some(strings(&["parking", "stage", "pool"])),
        ..Default::default()
    };
    assert_close(filter_multiplier(&item, &filters), 1.1);
}

#[test]
fn test_filter_bonuses_add_not_compound() {
    let mut item = make_item("Hall");
    item.category = Some("Venues".into());
    item.location = Some("Sydney".into());
    item.amenities = strings(&["parking"]);
    let filters = SearchFilters {
        category: Some("Venues".into()),
        location: Some("Sydney".into()),
        amenities: Some(strings(&["parking"])),
    };
    assert_close(filter_multiplier(&item, &filters), 1.25);
    assert_close(apply_filter_bonus(20.0, &item, &filters), 25.0);
}

#[test]
fn test_filters_never_reduce_score() {
    let item = make_item_aged("Acme", 400);
    let filters = SearchFilters {
        category: Some("Venues".into()),
        location: Some("Perth".into()),
        amenities: Some(strings(&["pool"])),
    };
    assert_eq!(scorer().score(&item, "acme", &filters), score(&item, "acme"));
}
