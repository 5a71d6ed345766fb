// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how marketplace results get their numbers.
//!
//! Text relevance decides most of it. Item properties (featured, verified,
//! new, well rated, pro) multiply it, matching filters nudge it up, and age
//! pulls it down. Each of those is its own small module so it can be tested
//! on its own; `relevance.rs` is where they meet.

pub(crate) mod core;
pub mod boost;
pub mod field;
pub mod filters;
pub mod freshness;
pub mod proximity;
pub mod quality;
pub mod ranking;

pub use core::*;
