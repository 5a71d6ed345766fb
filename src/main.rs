// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};

use rankwell::config::{parse_timestamp, RankConfig};
use rankwell::input::{find_item, load_items};
use rankwell::logging::init_tracing;
use rankwell::{
    get_matching_fields, get_matching_snippets, rank_items, BaseScore, MatchedField, QueryContext,
    RankError, RelevanceScorer, Result, ScoreBreakdown, SearchFilters, SearchableItem,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|source| RankError::Io {
        path: PathBuf::from("."),
        source,
    })?;
    let config = RankConfig::discover(cli.config.as_deref(), &cwd)?;

    let log_level = cli.log_level.as_deref().or(config.logging.level.as_deref());
    init_tracing(cli.verbose, log_level, cli.log_json || config.logging.json)?;

    let now = match cli.now.as_deref() {
        Some(value) => parse_timestamp(value)?,
        None => config.reference_time()?.unwrap_or_else(Utc::now),
    };
    let scorer = RelevanceScorer::at(now);
    tracing::debug!(now = %now, "reference time");

    match cli.command {
        Commands::Rank {
            items,
            query,
            filters,
            limit,
            json,
        } => run_rank(
            &items,
            QueryContext::new(query, filters.into_filters()),
            limit.unwrap_or(config.limit),
            json,
            &scorer,
        ),
        Commands::Explain {
            items,
            id,
            query,
            filters,
            json,
        } => run_explain(&items, &id, &query, &filters.into_filters(), json, &scorer),
        Commands::Highlight {
            items,
            query,
            context,
            json,
        } => run_highlight(&items, &query, context.unwrap_or(config.snippet_context), json),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RANK
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RankRow<'a> {
    rank: usize,
    id: &'a str,
    name: &'a str,
    score: f64,
    matched_fields: &'a [MatchedField],
}

fn run_rank(
    path: &Path,
    context: QueryContext,
    limit: usize,
    json: bool,
    scorer: &RelevanceScorer,
) -> Result<()> {
    let items = load_items(path)?;
    let ranked = rank_items(&items, &context, scorer);

    let rows: Vec<RankRow> = ranked
        .iter()
        .take(limit)
        .enumerate()
        .map(|(position, r)| RankRow {
            rank: position + 1,
            id: &r.id,
            name: &items[r.index].name,
            score: r.score,
            matched_fields: &r.matched_fields,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let heading = if context.query_text.trim().is_empty() {
        format!("{} items by reputation", items.len())
    } else {
        format!("{} items for \"{}\"", items.len(), context.query_text.trim())
    };
    banner(&heading);

    section_top("RESULTS");
    if rows.is_empty() {
        row(&format!("  {}", dim("no items")));
    }
    for r in &rows {
        row(&format!(
            "  {} {}  {}  {}",
            pad_left(&format!("#{}", r.rank), 4),
            score_value(r.score),
            pad_right(&truncate(r.name, 36), 36),
            field_list(r.matched_fields)
        ));
    }
    if ranked.len() > rows.len() {
        row(&format!("  {}", dim(&format!("… {} more", ranked.len() - rows.len()))));
    }
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// EXPLAIN
// ═══════════════════════════════════════════════════════════════════════════

fn run_explain(
    path: &Path,
    id: &str,
    query: &str,
    filters: &SearchFilters,
    json: bool,
    scorer: &RelevanceScorer,
) -> Result<()> {
    let items = load_items(path)?;
    let item = find_item(&items, id)?;
    let breakdown = scorer.explain(item, query, filters);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    print_breakdown(item, &breakdown);
    Ok(())
}

fn print_breakdown(item: &SearchableItem, breakdown: &ScoreBreakdown) {
    section_top(&item.name);
    field_row("id", &item.id);
    field_row(
        "query",
        if breakdown.query.is_empty() {
            "(empty)"
        } else {
            breakdown.query.as_str()
        },
    );

    match &breakdown.base {
        BaseScore::Text(text) => {
            section_mid("TEXT MATCH");
            let parts = [
                ("name", text.name),
                ("title", text.title),
                ("description", text.description_short),
                ("long description", text.description_long),
                ("category", text.category),
                ("location", text.location),
                ("tags", text.tags),
                ("amenities", text.amenities),
                ("proximity", text.proximity),
            ];
            for (label, value) in parts {
                field_row(label, &score_value(value));
            }
        }
        BaseScore::Quality(quality) => {
            section_mid("REPUTATION");
            field_row("rating", &score_value(quality.rating));
            field_row("reviews", &score_value(quality.reviews));
            field_row("views", &score_value(quality.views));
        }
    }
    field_row("base", &score_value(breakdown.base.total()));

    section_mid("MULTIPLIERS");
    let badges: Vec<String> = breakdown.boosts.iter().map(|b| boost_badge(*b)).collect();
    let boosts = if badges.is_empty() {
        dim("none")
    } else {
        badges.join(" ")
    };
    field_row("boosts", &format!("{}  {}", multiplier(breakdown.boost_multiplier), boosts));
    field_row("filters", &multiplier(breakdown.filter_multiplier));
    field_row("freshness", &multiplier(breakdown.freshness));

    section_mid("SCORE");
    field_row("final", &score_value(breakdown.score));
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// HIGHLIGHT
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HighlightRow<'a> {
    id: &'a str,
    name: &'a str,
    matched_fields: Vec<MatchedField>,
    snippets: Vec<String>,
}

fn run_highlight(path: &Path, query: &str, context_length: usize, json: bool) -> Result<()> {
    let items = load_items(path)?;

    let rows: Vec<HighlightRow> = items
        .iter()
        .filter_map(|item| {
            let matched_fields = get_matching_fields(item, query);
            if matched_fields.is_empty() {
                return None;
            }
            let snippets = [
                item.name.as_str(),
                item.title_str(),
                item.description_short_str(),
                item.description_long_str(),
            ]
            .into_iter()
            .flat_map(|text| get_matching_snippets(text, query, context_length))
            .collect();
            Some(HighlightRow {
                id: &item.id,
                name: &item.name,
                matched_fields,
                snippets,
            })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("{}", dim(&format!("no items match \"{}\"", query.trim())));
        return Ok(());
    }
    for r in &rows {
        section_top(r.name);
        field_row("matched", &field_list(&r.matched_fields));
        for snippet in &r.snippets {
            row(&format!("  {}", truncate(snippet, BOX_WIDTH - 2)));
        }
        section_bot();
    }
    Ok(())
}
