// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the rankwell CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `RANKWELL_THEME` first, then `COLORFGBG`, then defaults to dark. Colors
//! are dropped entirely when stdout is not a TTY or `NO_COLOR` is set, so
//! piping into a file gives clean text.
//!
//! # Theme detection order
//!
//! 1. `RANKWELL_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use rankwell::{Boost, MatchedField};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("RANKWELL_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", colors 7+ (except 8) are light backgrounds
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);  // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR`.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(color_fn: fn() -> String) -> String {
    if use_colors() {
        color_fn()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Visible length in chars, excluding ANSI codes
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `max` chars, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let b = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}│{}{}{}{}│{}", b, reset(), content, " ".repeat(pad), b, reset());
}

/// Print a `label: value` row with the label dimmed and aligned.
pub fn field_row(label: &str, value: &str) {
    let label = themed(GRAY, &[], &pad_right(label, 18));
    row(&format!("  {}{}", label, value));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let b = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], &truncate(label, BOX_WIDTH - 4)));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}┌{}{}{}{}┐{}", b, reset(), label_part, b, "─".repeat(remaining), reset());
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let b = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], &truncate(label, BOX_WIDTH - 4)));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}├{}{}{}{}┤{}", b, reset(), label_part, b, "─".repeat(remaining), reset());
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let b = border(GRAY);
    println!("{}└{}┘{}", b, "─".repeat(BOX_WIDTH), reset());
}

/// Print a double-line banner with a centered title.
pub fn banner(text: &str) {
    let b = border(BLUE);
    let colored = themed(BRIGHT_CYAN, &[BOLD], &truncate(text, BOX_WIDTH));
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    println!("{}╔{}╗{}", b, "═".repeat(BOX_WIDTH), reset());
    println!(
        "{}║{}{}{}{}{}║{}",
        b,
        reset(),
        " ".repeat(left_pad),
        colored,
        " ".repeat(right_pad),
        b,
        reset()
    );
    println!("{}╚{}╝{}", b, "═".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score, always with 2 decimals.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>8.2}", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 50.0 {
        BRIGHT_GREEN()
    } else if score >= 20.0 {
        GREEN()
    } else if score > 0.0 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Multiplier like `×1.30`, dimmed when it is exactly 1.
pub fn multiplier(value: f64) -> String {
    let text = format!("×{:.4}", value);
    if value == 1.0 {
        themed(GRAY, &[], &text)
    } else if value > 1.0 {
        themed(GREEN, &[], &text)
    } else {
        themed(YELLOW, &[], &text)
    }
}

/// Color-coded matched field label.
pub fn field_label(field: MatchedField) -> String {
    let color: fn() -> String = match field {
        MatchedField::Name | MatchedField::Title => BRIGHT_GREEN,
        MatchedField::Description => BLUE,
        MatchedField::Category | MatchedField::Location => CYAN,
        MatchedField::Tags | MatchedField::Amenities => MAGENTA,
    };
    themed(color, &[], field.as_str())
}

/// Comma-separated field labels, or a dim dash when nothing matched.
pub fn field_list(fields: &[MatchedField]) -> String {
    if fields.is_empty() {
        return themed(GRAY, &[], "-");
    }
    fields
        .iter()
        .map(|f| field_label(*f))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Boost badge like `[featured ×1.5]`.
pub fn boost_badge(boost: Boost) -> String {
    themed(YELLOW, &[BOLD], &format!("[{} ×{}]", boost.label(), boost.factor()))
}

/// Dim secondary text.
pub fn dim(text: &str) -> String {
    themed(GRAY, &[DIM], text)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
