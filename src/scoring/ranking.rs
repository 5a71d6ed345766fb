// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: scoring a candidate set and putting it in order.
//!
//! Scoring is independent per item, so with the `parallel` feature the
//! candidates are scored on the rayon pool; without it they are scored in a
//! plain loop. Both paths sort with the same comparator and produce the same
//! order.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Name** - ascending, so equal scores read alphabetically
//! 3. **Input position** - final tiebreaker for absolute determinism

use serde::Serialize;
use std::cmp::Ordering;
use std::time::Instant;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::highlight::{matching_fields_prepared, MatchedField};
use crate::relevance::RelevanceScorer;
use crate::scoring::field::PreparedQuery;
use crate::types::{QueryContext, SearchableItem};

/// One scored candidate, pointing back into the input slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem {
    /// Position in the input slice.
    pub index: usize,
    pub id: String,
    pub score: f64,
    pub matched_fields: Vec<MatchedField>,
}

/// Compare two ranked items. `Ordering::Less` means `a` ranks first.
pub fn compare_ranked(a: &RankedItem, b: &RankedItem, items: &[SearchableItem]) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => {
            let a_name = items.get(a.index).map(|i| i.name.as_str()).unwrap_or("");
            let b_name = items.get(b.index).map(|i| i.name.as_str()).unwrap_or("");
            match a_name.cmp(b_name) {
                Ordering::Equal => a.index.cmp(&b.index),
                ord => ord,
            }
        }
        ord => ord,
    }
}

/// Score every item against `context` and return them best first.
pub fn rank_items(
    items: &[SearchableItem],
    context: &QueryContext,
    scorer: &RelevanceScorer,
) -> Vec<RankedItem> {
    let start = Instant::now();
    let query = PreparedQuery::new(&context.query_text);

    let rank_one = |(index, item): (usize, &SearchableItem)| RankedItem {
        index,
        id: item.id.clone(),
        score: scorer.score_prepared(item, &query, &context.filters),
        matched_fields: matching_fields_prepared(item, &query),
    };

    #[cfg(feature = "rayon")]
    let mut ranked: Vec<RankedItem> = items.par_iter().enumerate().map(rank_one).collect();
    #[cfg(not(feature = "rayon"))]
    let mut ranked: Vec<RankedItem> = items.iter().enumerate().map(rank_one).collect();

    ranked.sort_by(|a, b| compare_ranked(a, b, items));

    tracing::debug!(
        candidates = items.len(),
        query = query.as_str(),
        elapsed = ?start.elapsed(),
        "ranked candidates"
    );
    ranked
}
