// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Item files for the CLI.
//!
//! Accepts either a bare JSON array of items or an object wrapping one under
//! `"items"`, which is what most search APIs return.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{RankError, Result};
use crate::types::SearchableItem;

#[derive(Deserialize)]
struct WrappedItems {
    items: Vec<SearchableItem>,
}

/// Parse items from a JSON string.
///
/// The shape is picked from the first token, so a bad item reports its own
/// error and position instead of a generic shape mismatch.
pub fn parse_items(json: &str) -> std::result::Result<Vec<SearchableItem>, serde_json::Error> {
    if json.trim_start().starts_with('[') {
        serde_json::from_str(json)
    } else {
        serde_json::from_str::<WrappedItems>(json).map(|doc| doc.items)
    }
}

/// Read and parse an item file.
pub fn load_items(path: &Path) -> Result<Vec<SearchableItem>> {
    let content = fs::read_to_string(path).map_err(|source| RankError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_items(&content).map_err(|source| RankError::ItemJson {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = items.len(), "loaded items");
    Ok(items)
}

/// Find an item by id.
pub fn find_item<'a>(items: &'a [SearchableItem], id: &str) -> Result<&'a SearchableItem> {
    items
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| RankError::ItemNotFound(id.to_string()))
}
