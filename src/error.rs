// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for the fallible edges of the crate.
//!
//! Scoring itself never fails. Everything that touches the outside world
//! (item files, config files, timestamps, the logger) reports through
//! [`RankError`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid item JSON in {}: {source}", path.display())]
    ItemJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid timestamp '{value}' (expected RFC 3339): {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("no item with id '{0}'")]
    ItemNotFound(String),

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RankError>;
