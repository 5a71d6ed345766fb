// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI configuration, read from `rankwell.toml`.
//!
//! Every key is optional:
//!
//! ```toml
//! limit = 10
//! snippet_context = 100
//! now = "2025-06-01T00:00:00Z"   # pin the clock for reproducible output
//!
//! [logging]
//! level = "debug"
//! json = false
//! ```
//!
//! The scoring constants are not configurable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RankError, Result};
use crate::highlight::DEFAULT_SNIPPET_CONTEXT;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "rankwell.toml";

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankConfig {
    /// Results printed by `rank`.
    pub limit: usize,
    /// Context length passed to snippet extraction.
    pub snippet_context: usize,
    /// RFC 3339 reference time. Absent means the wall clock.
    pub now: Option<String>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            snippet_context: DEFAULT_SNIPPET_CONTEXT,
            now: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl RankConfig {
    /// Load from an explicit path. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| RankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| RankError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `explicit` if given, otherwise `rankwell.toml` from `dir` if it
    /// exists, otherwise defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Pinned reference time, if configured.
    pub fn reference_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.now.as_deref().map(parse_timestamp).transpose()
    }
}

/// Parse an RFC 3339 timestamp into UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| RankError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}
