//! End-to-end relevance scores: the properties callers rely on.

use crate::common::{
    assert_close, category_filter, make_item, make_item_aged, make_rich_item,
    no_filters, score, scorer, strings,
};
use rankwell::scoring::round_score;
use rankwell::{
    calculate_quality_score, calculate_relevance_score, get_matching_fields, get_matching_snippets,
    BaseScore, MatchedField, SearchableItem,
};

#[test]
fn test_empty_query_uses_quality_with_same_post_processing() {
    let mut item = make_item_aged("Acme", 60);
    item.category = Some("Venues".into());
    item.average_rating = 4.0;
    item.review_count = 20;
    item.view_count = 100;
    item.verified = true;

    let filters = category_filter("Venues");
    let expected = round_score(calculate_quality_score(&item) * 1.2 * 1.1 * 0.9);
    assert_eq!(scorer().score(&item, "", &filters), expected);
    assert_eq!(scorer().score(&item, "   ", &filters), expected);
}

#[test]
fn test_quality_components() {
    let mut item = make_item("Acme");
    item.average_rating = 4.0;
    item.review_count = 0;
    item.view_count = 0;
    assert_eq!(calculate_quality_score(&item), 40.0);

    // log components saturate at their caps
    item.review_count = u64::MAX;
    item.view_count = u64::MAX;
    assert_close(calculate_quality_score(&item), 40.0 + 30.0 + 20.0);
}

#[test]
fn test_exact_name_match_without_boosts() {
    let item = make_item_aged("Acme", 100);
    assert_eq!(score(&item, "ACME"), 25.5); // 30 × 0.85
}

#[test]
fn test_high_rating_strictly_increases_score() {
    let mut item = make_item_aged("Harbour Jazz Band", 100);
    item.average_rating = 4.0;
    let before = score(&item, "jazz");
    item.average_rating = 4.5;
    let after = score(&item, "jazz");
    assert!(before > 0.0);
    assert!(after > before, "{} should exceed {}", after, before);
}

#[test]
fn test_determinism() {
    let s = scorer();
    let filters = category_filter("Venues");
    for index in 0..50 {
        let item = make_rich_item(index);
        let first = s.score(&item, "wedding jazz", &filters);
        let second = s.score(&item, "wedding jazz", &filters);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}

#[test]
fn test_scores_are_rounded_to_two_decimals() {
    let s = scorer();
    for index in 0..50 {
        let value = s.score(&make_rich_item(index), "harbour venue", &no_filters());
        assert_eq!(value, (value * 100.0).round() / 100.0);
        assert!(value >= 0.0);
    }
}

#[test]
fn test_empty_arrays_contribute_zero() {
    let bare = make_item_aged("Acme", 400);
    assert!(bare.tags.is_empty() && bare.amenities.is_empty());
    assert_eq!(score(&bare, "parking"), 0.0);

    let breakdown = scorer().explain(&bare, "acme", &no_filters());
    match breakdown.base {
        BaseScore::Text(text) => {
            assert_eq!(text.tags, 0.0);
            assert_eq!(text.amenities, 0.0);
            assert_eq!(text.total(), text.name);
        }
        BaseScore::Quality(_) => panic!("expected text scores"),
    }
    assert_eq!(breakdown.score, 22.5); // 30 × 0.75
}

#[test]
fn test_description_labels_are_not_duplicated() {
    let mut item = make_item("Acme");
    item.description_short = Some("live music".into());
    item.description_long = Some("more live music".into());
    let fields = get_matching_fields(&item, "music");
    assert_eq!(fields, vec![MatchedField::Description]);
}

#[test]
fn test_snippet_example() {
    assert_eq!(get_matching_snippets("abcXYZdef", "XYZ", 4), vec!["...bcXYZde..."]);
}

#[test]
fn test_regex_queries_never_panic() {
    let mut item = make_item_aged("a+b (deluxe) [v2]", 400);
    item.tags = strings(&["c++", ".*"]);
    for query in ["a+b", "(", ")", "[v2", ".*", "\\", "c++", "^$", "a{1,}"] {
        let value = score(&item, query);
        assert!(value.is_finite());
    }
    // prefix + word + substring, exactly as for a plain word: 45 × 0.75
    assert_eq!(score(&make_item_aged("a+b deluxe", 400), "a+b"), 33.75);
}

#[test]
fn test_proximity_bonus_in_breakdown() {
    let mut item = make_item_aged("Harbour Events", 400);
    item.description_short = Some("A jazz band for weddings".into());
    let breakdown = scorer().explain(&item, "jazz band", &no_filters());
    let BaseScore::Text(text) = breakdown.base else {
        panic!("expected text scores");
    };
    assert_eq!(text.proximity, 5.0);
    // description_short: word + substring (3 × 2.5) + partial 2/2 (3 × 0.5) = 9
    assert_eq!(text.description_short, 9.0);
    assert_eq!(breakdown.score, round_score((9.0 + 5.0) * 0.75));
}

#[test]
fn test_far_apart_tokens_earn_no_proximity() {
    let mut item = make_item_aged("Jazz", 400);
    item.description_long = Some(format!("{} band", "x".repeat(80)));
    let breakdown = scorer().explain(&item, "jazz band", &no_filters());
    let BaseScore::Text(text) = breakdown.base else {
        panic!("expected text scores");
    };
    assert_eq!(text.proximity, 0.0);
}

#[test]
fn test_wall_clock_entrypoint() {
    let item = SearchableItem {
        name: "Acme".into(),
        ..Default::default()
    };
    // unknown age: freshness does not depend on the clock
    assert_eq!(calculate_relevance_score(&item, "acme", &no_filters()), 25.5);
}

#[test]
fn test_breakdown_total_equals_score() {
    let s = scorer();
    let filters = category_filter("Venues");
    for index in 0..20 {
        let item = make_rich_item(index);
        for query in ["", "wedding", "harbour jazz", "zzz"] {
            let breakdown = s.explain(&item, query, &filters);
            assert_eq!(breakdown.total(), s.score(&item, query, &filters));
            assert_eq!(breakdown.score, round_score(breakdown.unrounded()));
        }
    }
}
