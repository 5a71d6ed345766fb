// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snippet extraction.
//!
//! Snippets slice text by character offsets after case folding, and folding
//! can change lengths (`İ` lower-cases to two chars). Any text, any query,
//! any context length: no panics, at most three snippets, and every snippet
//! body is a piece of the original text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rankwell::get_matching_snippets;
use rankwell::highlight::MAX_SNIPPETS;

fuzz_target!(|data: (&str, &str, u16)| {
    let (text, query, context) = data;
    let snippets = get_matching_snippets(text, query, usize::from(context));

    assert!(snippets.len() <= MAX_SNIPPETS);
    for snippet in &snippets {
        let body = snippet.strip_prefix("...").unwrap_or(snippet);
        let body = body.strip_suffix("...").unwrap_or(body);
        if !text.contains("...") {
            assert!(text.contains(body), "snippet {:?} not from text", snippet);
        }
    }
});
