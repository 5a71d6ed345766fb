//! Match tiers on single and multi-valued fields.

use crate::common::strings;
use rankwell::{score_array, score_field, PreparedQuery, FIELD_WEIGHTS};

const W: f64 = 10.0;

#[test]
fn test_exact_match_excludes_other_tiers() {
    assert_eq!(score_field("Jazz", "jazz", W), 30.0);
}

#[test]
fn test_prefix_word_and_substring_stack() {
    // 2.0 + 1.5 + 1.0
    assert_eq!(score_field("Jazz Band", "jazz", W), 45.0);
}

#[test]
fn test_word_and_substring_without_prefix() {
    assert_eq!(score_field("Smooth jazz", "jazz", W), 25.0);
}

#[test]
fn test_prefix_without_word_boundary() {
    assert_eq!(score_field("Jazzy", "jazz", W), 30.0);
}

#[test]
fn test_substring_only() {
    assert_eq!(score_field("Razzmatazz", "mata", W), 10.0);
}

#[test]
fn test_partial_tokens_use_containment() {
    // "art" is inside "party"; both tokens present, half weight
    assert_eq!(score_field("party hire", "art hire", W), 5.0);
    // one of two tokens present
    assert_eq!(score_field("party supplies", "art hire", W), 2.5);
}

#[test]
fn test_single_token_query_has_no_partial_tier() {
    assert_eq!(score_field("nothing here", "zzz", W), 0.0);
}

#[test]
fn test_empty_value_and_empty_query() {
    assert_eq!(score_field("", "jazz", W), 0.0);
    assert_eq!(score_field("Jazz", "", W), 0.0);
    assert_eq!(score_field("Jazz", "   ", W), 0.0);
}

#[test]
fn test_query_is_trimmed_and_lowercased() {
    assert_eq!(score_field("Jazz Band", "  JAZZ ", W), score_field("Jazz Band", "jazz", W));
}

#[test]
fn test_array_sums_without_dedup() {
    let tags = strings(&["jazz", "jazz", "blues"]);
    assert_eq!(score_array(&tags, "jazz", FIELD_WEIGHTS.tags), 30.0);
}

#[test]
fn test_empty_array_contributes_zero() {
    assert_eq!(score_array(&[], "jazz", FIELD_WEIGHTS.tags), 0.0);
}

#[test]
fn test_regex_metacharacters_are_literal() {
    // word boundary cannot sit between "+" and " ", so no word tier
    assert_eq!(score_field("c++ developer", "c++", W), 30.0);
    assert_eq!(score_field("a+b combos", "a+b", W), 45.0);
    // "." must not match arbitrary characters
    assert_eq!(score_field("abc", "a.c", W), 0.0);
    for query in ["(", "[", "*", "?", "\\", "$^", "a|b", "{2}"] {
        let score = score_field("weird (input) [x] * ? \\ $^ a|b {2}", query, W);
        assert!(score >= W, "query {:?} scored {}", query, score);
    }
}

#[test]
fn test_prepared_query_matches_free_function() {
    let prepared = PreparedQuery::new("Live Music");
    assert_eq!(prepared.as_str(), "live music");
    assert_eq!(prepared.tokens(), &["live", "music"]);
    assert_eq!(
        prepared.score_field("Live music every Friday", W),
        score_field("Live music every Friday", "live music", W)
    );
}
