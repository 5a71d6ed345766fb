// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tiered text matching for a single field.
//!
//! A field is compared to the query four ways: exact, prefix, whole word and
//! substring. Exact match wins outright (`weight × 3`) and nothing else is
//! counted. Otherwise every tier that matches adds its share, so "wedding"
//! against "Wedding Photography" collects prefix + word + substring. Queries
//! with two or more tokens also earn a partial credit proportional to how
//! many tokens appear anywhere in the field.
//!
//! Compiling the word-boundary regex is the only non-trivial cost, so it
//! happens once per query in [`PreparedQuery`] and is then reused for every
//! field of every candidate.

use regex::{Regex, RegexBuilder};

use crate::scoring::core::{
    EXACT_MATCH_MULTIPLIER, MIN_MULTI_TOKEN_QUERY, PARTIAL_TOKEN_MULTIPLIER,
    PREFIX_MATCH_MULTIPLIER, SUBSTRING_MATCH_MULTIPLIER, WORD_MATCH_MULTIPLIER,
};
use crate::types::normalize_query;

/// A normalized query with its tokens and word-boundary pattern compiled.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    text: String,
    tokens: Vec<String>,
    word_pattern: Option<Regex>,
}

impl PreparedQuery {
    /// Normalize (trim + lower-case) and compile a query.
    pub fn new(query: &str) -> Self {
        let text = normalize_query(query);
        let tokens = text.split_whitespace().map(str::to_string).collect();
        let word_pattern = if text.is_empty() {
            None
        } else {
            compile_word_pattern(&text)
        };
        Self {
            text,
            tokens,
            word_pattern,
        }
    }

    /// The normalized query text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whitespace-separated tokens of the normalized query.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Score one field value at the given weight.
    ///
    /// Empty values score 0, and so does an empty query (the orchestrator
    /// routes those to the quality fallback before getting here).
    pub fn score_field(&self, value: &str, weight: f64) -> f64 {
        if value.is_empty() || self.text.is_empty() {
            return 0.0;
        }

        let field = value.to_lowercase();
        if field.trim() == self.text {
            return weight * EXACT_MATCH_MULTIPLIER;
        }

        let mut score = 0.0;

        if field.starts_with(&self.text) {
            score += weight * PREFIX_MATCH_MULTIPLIER;
        }

        if self
            .word_pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&field))
        {
            score += weight * WORD_MATCH_MULTIPLIER;
        }

        if field.contains(&self.text) {
            score += weight * SUBSTRING_MATCH_MULTIPLIER;
        }

        if self.tokens.len() >= MIN_MULTI_TOKEN_QUERY {
            // Substring containment, not token equality: "art" counts inside "party".
            let matched = self
                .tokens
                .iter()
                .filter(|token| field.contains(token.as_str()))
                .count();
            score += (matched as f64 / self.tokens.len() as f64) * weight * PARTIAL_TOKEN_MULTIPLIER;
        }

        score
    }

    /// Sum of [`score_field`](Self::score_field) over every element.
    ///
    /// No de-duplication: the same term in three tags scores three times.
    pub fn score_array(&self, values: &[String], weight: f64) -> f64 {
        values
            .iter()
            .map(|value| self.score_field(value, weight))
            .sum()
    }
}

/// `\b<escaped query>\b`, case-insensitive.
///
/// Escaping makes every query a literal. The only way this can still fail is
/// the compiled-size limit on absurdly long queries; the word tier is then
/// skipped for that query.
fn compile_word_pattern(query: &str) -> Option<Regex> {
    let pattern = format!(r"\b{}\b", regex::escape(query));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(err) => {
            tracing::warn!(
                query_len = query.len(),
                error = %err,
                "word-boundary pattern rejected, skipping word tier"
            );
            None
        }
    }
}

/// Score one field against a query. Compiles the query; prefer
/// [`PreparedQuery`] when scoring many fields.
pub fn score_field(value: &str, query: &str, weight: f64) -> f64 {
    PreparedQuery::new(query).score_field(value, weight)
}

/// Score a multi-valued field against a query.
pub fn score_array(values: &[String], query: &str, weight: f64) -> f64 {
    PreparedQuery::new(query).score_array(values, weight)
}
