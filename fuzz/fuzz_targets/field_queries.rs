// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for field matching with hostile queries.
//!
//! Queries are user input and go into a word-boundary regex. Whatever the
//! bytes, matching must not panic and must stay within the tier bounds.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rankwell::{score_array, score_field, PreparedQuery};

fuzz_target!(|data: (&str, &str)| {
    let (value, query) = data;
    let query: String = query.chars().take(200).collect();
    let query = query.as_str();

    let score = score_field(value, query, 1.0);
    assert!(score.is_finite());
    // exact (3) or at most prefix + word + substring + partial (5)
    assert!((0.0..=5.0).contains(&score), "score {} out of bounds", score);

    let prepared = PreparedQuery::new(query);
    assert_eq!(prepared.score_field(value, 1.0), score);

    let values = vec![value.to_string(), value.to_uppercase()];
    assert!(score_array(&values, query, 1.0) >= 0.0);

    // The substring tier alone guarantees a floor for contained queries.
    if !prepared.is_empty() && value.to_lowercase().contains(prepared.as_str()) {
        assert!(score >= 1.0);
    }
});
