// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Proximity bonus: all query terms close together.
//!
//! "jazz band" should rank an item that says "a jazz band for weddings" above
//! one that mentions jazz in the name and a band three paragraphs later. The
//! check is deliberately blunt: glue the main text fields together, slide a
//! fixed window over them, and pay a flat bonus the first time a window holds
//! every token. No accumulation across windows.

use crate::scoring::core::{MIN_MULTI_TOKEN_QUERY, PROXIMITY_BONUS, PROXIMITY_WINDOW_CHARS};
use crate::types::SearchableItem;

/// Lower-cased `name title description_short description_long`, space-joined.
///
/// Absent fields contribute an empty string, so separators stay in place.
pub fn proximity_haystack(item: &SearchableItem) -> String {
    [
        item.name.as_str(),
        item.title_str(),
        item.description_short_str(),
        item.description_long_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// [`PROXIMITY_BONUS`] if every whitespace token of `query` fits in one window, else 0.
///
/// Single-token queries never earn the bonus.
pub fn proximity_bonus(item: &SearchableItem, query: &str) -> f64 {
    let query = query.to_lowercase();
    let tokens: Vec<&str> = query.split_whitespace().collect();
    if tokens.len() < MIN_MULTI_TOKEN_QUERY {
        return 0.0;
    }

    let haystack = proximity_haystack(item);
    if tokens_within_window(&haystack, &tokens, PROXIMITY_WINDOW_CHARS) {
        PROXIMITY_BONUS
    } else {
        0.0
    }
}

/// Does some `window`-character slice of `haystack` contain every token?
///
/// Windows advance one character at a time and are measured in Unicode
/// scalar values. A haystack shorter than the window is checked whole.
pub fn tokens_within_window(haystack: &str, tokens: &[&str], window: usize) -> bool {
    // Cheap rejection: a token missing from the whole text is missing from every window.
    if !tokens.iter().all(|token| haystack.contains(token)) {
        return false;
    }

    // Byte offset of every char start, plus the end of the string.
    let bounds: Vec<usize> = haystack
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(haystack.len()))
        .collect();
    let char_count = bounds.len() - 1;

    if char_count <= window {
        return true;
    }

    (0..=char_count - window).any(|start| {
        let slice = &haystack[bounds[start]..bounds[start + window]];
        tokens.iter().all(|token| slice.contains(token))
    })
}
