// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-through memo for relevance scores.
//!
//! The scoring engine knows nothing about caching. This layer sits in front
//! of it for callers that re-score the same `(item, query, filters)` triple
//! often, e.g. paging through one result set.
//!
//! Entries are keyed by item id, so callers must drop the cache (or
//! [`ScoreCache::clear`] it) when item data changes. The reference time is
//! not part of the key either: one cache per [`RelevanceScorer`].
//!
//! When the cache reaches capacity it is cleared wholesale. Scores are cheap
//! to recompute, so there is no LRU bookkeeping.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::relevance::RelevanceScorer;
use crate::types::{normalize_query, QueryContext, SearchFilters, SearchableItem};

pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub item_id: String,
    /// Normalized query, so `" Jazz"` and `"jazz"` share an entry.
    pub query: String,
    pub filters: SearchFilters,
}

impl CacheKey {
    pub fn new(item_id: &str, query: &str, filters: &SearchFilters) -> Self {
        Self {
            item_id: item_id.to_string(),
            query: normalize_query(query),
            filters: filters.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl CacheStats {
    /// Hit rate in `[0, 1]`. Zero before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug)]
pub struct ScoreCache {
    entries: RwLock<HashMap<CacheKey, f64>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for ScoreCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl ScoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capacity of 0 is treated as 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<f64> {
        self.entries.read().get(key).copied()
    }

    pub fn insert(&self, key: CacheKey, score: f64) {
        let mut entries = self.entries.write();
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            tracing::debug!(capacity = self.capacity, "score cache full, clearing");
            entries.clear();
        }
        entries.insert(key, score);
    }

    /// Cached score, or score with `scorer` and remember it.
    ///
    /// Items without an id cannot be keyed and are always scored fresh.
    pub fn get_or_score(
        &self,
        item: &SearchableItem,
        context: &QueryContext,
        scorer: &RelevanceScorer,
    ) -> f64 {
        if item.id.is_empty() {
            return scorer.score(item, &context.query_text, &context.filters);
        }

        let key = CacheKey::new(&item.id, &context.query_text, &context.filters);
        if let Some(score) = self.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return score;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let score = scorer.score(item, &key.query, &context.filters);
        self.insert(key, score);
        score
    }

    pub fn clear(&self) {
        self.entries.write().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}
