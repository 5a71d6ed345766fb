// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structured logging setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! caller's business. The `rankwell` binary calls [`init_tracing`] once at
//! startup.
//!
//! Filter precedence: `RUST_LOG`, then `RANKWELL_LOG`, then the CLI flags.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{RankError, Result};

/// Environment variable consulted after `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "RANKWELL_LOG";

/// Install the global subscriber. Output goes to stderr so stdout stays
/// clean for `--json`.
pub fn init_tracing(verbose: bool, log_level: Option<&str>, log_json: bool) -> Result<()> {
    let directive = filter_directive(verbose, log_level);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()
    };

    installed.map_err(|e| RankError::Logging(e.to_string()))
}

/// Filter directive for the given flags. A bare level like `trace` is
/// scoped to this crate; anything with `=` is passed through untouched.
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("rankwell={}", level),
        (true, None) => "rankwell=debug".to_string(),
        (false, None) => "rankwell=warn".to_string(),
    }
}
