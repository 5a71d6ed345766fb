// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting helpers for result cards.
//!
//! None of this affects ranking. The UI wants to know which fields matched
//! (to bold a label) and a few short excerpts around each hit (to show under
//! the title). Both are plain case-insensitive substring checks.
//!
//! Snippet offsets are in characters, never bytes, and the excerpt is cut
//! from the original text so the user sees the original casing.

use serde::Serialize;
use std::fmt;

use crate::scoring::field::PreparedQuery;
use crate::types::{normalize_query, SearchableItem};

/// Default `context_length` for [`get_matching_snippets`].
pub const DEFAULT_SNIPPET_CONTEXT: usize = 100;

/// At most this many snippets per text.
pub const MAX_SNIPPETS: usize = 3;

const ELLIPSIS: &str = "...";

/// Label for a field that contained the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedField {
    Name,
    Title,
    /// Either description field.
    Description,
    Category,
    Location,
    Tags,
    Amenities,
}

impl MatchedField {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchedField::Name => "name",
            MatchedField::Title => "title",
            MatchedField::Description => "description",
            MatchedField::Category => "category",
            MatchedField::Location => "location",
            MatchedField::Tags => "tags",
            MatchedField::Amenities => "amenities",
        }
    }
}

impl fmt::Display for MatchedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of `item` containing `query`, in display order, without duplicates.
///
/// An empty (or whitespace-only) query matches nothing.
pub fn get_matching_fields(item: &SearchableItem, query: &str) -> Vec<MatchedField> {
    matching_fields_for(item, &normalize_query(query))
}

/// [`get_matching_fields`] for an already prepared query.
pub fn matching_fields_prepared(item: &SearchableItem, query: &PreparedQuery) -> Vec<MatchedField> {
    matching_fields_for(item, query.as_str())
}

fn matching_fields_for(item: &SearchableItem, query: &str) -> Vec<MatchedField> {
    if query.is_empty() {
        return Vec::new();
    }

    let contains = |value: &str| value.to_lowercase().contains(query);
    let any_contains = |values: &[String]| values.iter().any(|v| contains(v));

    let checks = [
        (MatchedField::Name, contains(&item.name)),
        (MatchedField::Title, contains(item.title_str())),
        (
            MatchedField::Description,
            contains(item.description_short_str()) || contains(item.description_long_str()),
        ),
        (MatchedField::Category, contains(item.category_str())),
        (MatchedField::Location, contains(item.location_str())),
        (MatchedField::Tags, any_contains(&item.tags)),
        (MatchedField::Amenities, any_contains(&item.amenities)),
    ];

    checks
        .into_iter()
        .filter_map(|(field, matched)| matched.then_some(field))
        .collect()
}

/// Up to [`MAX_SNIPPETS`] excerpts around successive occurrences of `query`.
///
/// Each excerpt keeps up to `context_length / 2` characters on either side of
/// the hit. `...` is added on a side only when the excerpt stops short of
/// that end of the text. Occurrences are found case-insensitively and never
/// overlap. Empty text or an empty (trimmed) query gives no snippets.
///
/// # Example
///
/// ```
/// use rankwell::get_matching_snippets;
///
/// assert_eq!(get_matching_snippets("abcXYZdef", "XYZ", 4), vec!["...bcXYZde..."]);
/// ```
pub fn get_matching_snippets(text: &str, query: &str, context_length: usize) -> Vec<String> {
    // Folded char by char, like the text, so word-final sigma agrees.
    let needle: Vec<char> = query.trim().chars().flat_map(char::to_lowercase).collect();
    if text.is_empty() || needle.is_empty() {
        return Vec::new();
    }

    let original: Vec<char> = text.chars().collect();
    let folded = FoldedText::new(&original);
    let half = context_length / 2;

    let mut snippets = Vec::new();
    let mut from = 0;
    while snippets.len() < MAX_SNIPPETS {
        let Some(hit) = folded.find(&needle, from) else {
            break;
        };
        let hit_end = hit + needle.len();

        let match_start = folded.origin[hit];
        let match_end = folded.origin[hit_end - 1] + 1;
        let start = match_start.saturating_sub(half);
        let end = (match_end + half).min(original.len());

        let mut snippet = String::new();
        if start > 0 {
            snippet.push_str(ELLIPSIS);
        }
        snippet.extend(&original[start..end]);
        if end < original.len() {
            snippet.push_str(ELLIPSIS);
        }
        snippets.push(snippet);

        from = hit_end;
    }
    snippets
}

/// Lower-cased characters of a text, each remembering which original
/// character it came from. Lower-casing can expand one character into
/// several, so folded and original indices do not line up on their own.
struct FoldedText {
    chars: Vec<char>,
    origin: Vec<usize>,
}

impl FoldedText {
    fn new(original: &[char]) -> Self {
        let mut chars = Vec::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len());
        for (index, c) in original.iter().enumerate() {
            for lower in c.to_lowercase() {
                chars.push(lower);
                origin.push(index);
            }
        }
        Self { chars, origin }
    }

    /// First occurrence of `needle` at or after folded index `from`.
    fn find(&self, needle: &[char], from: usize) -> Option<usize> {
        if needle.len() > self.chars.len() {
            return None;
        }
        (from..=self.chars.len() - needle.len())
            .find(|&start| self.chars[start..start + needle.len()] == *needle)
    }
}
