//! Ranking a candidate set.

use crate::common::{make_item_aged, make_rich_item, marketplace, scorer};
use rankwell::{compare_ranked, rank_items, MatchedField, QueryContext, SearchFilters};
use std::cmp::Ordering;

fn ids(ranked: &[rankwell::RankedItem]) -> Vec<&str> {
    ranked.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_text_query_order() {
    let items = marketplace();
    let ranked = rank_items(&items, &QueryContext::text("jazz"), &scorer());
    assert_eq!(ids(&ranked), vec!["band", "venue", "florist"]);
    assert_eq!(ranked[1].matched_fields, vec![MatchedField::Description]);
    assert_eq!(ranked[2].score, 0.0);
}

#[test]
fn test_empty_query_ranks_by_reputation_then_name() {
    let items = marketplace();
    let ranked = rank_items(&items, &QueryContext::text(""), &scorer());
    // venue and florist both score 0; "Grand Ballroom" sorts before "Petal & Stem"
    assert_eq!(ids(&ranked), vec!["band", "venue", "florist"]);
    assert!(ranked.iter().all(|r| r.matched_fields.is_empty()));
}

#[test]
fn test_filters_lift_matching_items() {
    let items = marketplace();
    let plain = rank_items(&items, &QueryContext::text("wedding"), &scorer());
    let filtered = rank_items(
        &items,
        &QueryContext::new(
            "wedding",
            SearchFilters {
                location: Some("sydney".into()),
                ..Default::default()
            },
        ),
        &scorer(),
    );
    let score_of = |ranked: &[rankwell::RankedItem], id: &str| {
        ranked.iter().find(|r| r.id == id).map(|r| r.score).unwrap_or_default()
    };
    assert!(score_of(&filtered, "florist") > score_of(&plain, "florist"));
    assert_eq!(score_of(&filtered, "venue"), score_of(&plain, "venue"));
}

#[test]
fn test_ranked_scores_match_individual_scores() {
    let items: Vec<_> = (0..200).map(make_rich_item).collect();
    let context = QueryContext::text("harbour wedding");
    let s = scorer();
    let ranked = rank_items(&items, &context, &s);

    assert_eq!(ranked.len(), items.len());
    for pair in ranked.windows(2) {
        assert_ne!(compare_ranked(&pair[0], &pair[1], &items), Ordering::Greater);
    }
    for r in &ranked {
        assert_eq!(r.score, s.score(&items[r.index], "harbour wedding", &SearchFilters::default()));
    }
}

#[test]
fn test_identical_items_keep_input_order() {
    let items = vec![
        make_item_aged("Echo", 100),
        make_item_aged("Echo", 100),
        make_item_aged("Echo", 100),
    ];
    let ranked = rank_items(&items, &QueryContext::text("echo"), &scorer());
    let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
    assert_eq!(order, vec![0, 1, 2]);
}
