// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the rankwell command-line interface.
//!
//! Three subcommands over a JSON file of items: `rank` to score and order
//! them, `explain` to break one item's score into its parts, and `highlight`
//! to show matched fields and snippets.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use rankwell::SearchFilters;

#[derive(Parser)]
#[command(
    name = "rankwell",
    about = "Weighted multi-field relevance scoring for marketplace search",
    version
)]
pub struct Cli {
    /// Config file (defaults to ./rankwell.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug-level logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. `trace` or `rankwell=debug`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Reference time (RFC 3339) for freshness and the new-supplier boost
    #[arg(long, global = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by `rank` and `explain`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Category filter (exact match)
    #[arg(long)]
    pub category: Option<String>,

    /// Location filter (substring, case-insensitive)
    #[arg(long)]
    pub location: Option<String>,

    /// Amenity filter, repeatable
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,
}

impl FilterArgs {
    pub fn into_filters(self) -> SearchFilters {
        SearchFilters {
            category: self.category,
            location: self.location,
            amenities: if self.amenities.is_empty() {
                None
            } else {
                Some(self.amenities)
            },
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every item and print them best first
    Rank {
        /// JSON file: an array of items or {"items": [...]}
        items: PathBuf,

        /// Search query (empty ranks by reputation)
        #[arg(default_value = "")]
        query: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how one item's score is built
    Explain {
        /// JSON file: an array of items or {"items": [...]}
        items: PathBuf,

        /// Item id
        id: String,

        /// Search query
        #[arg(default_value = "")]
        query: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show matched fields and snippets for every matching item
    Highlight {
        /// JSON file: an array of items or {"items": [...]}
        items: PathBuf,

        /// Search query
        query: String,

        /// Characters of context around each hit (split evenly per side)
        #[arg(short, long)]
        context: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}
