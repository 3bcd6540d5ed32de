//! # OpenAI Cost Report
//!
//! Pulls the last 30 days of an organization's costs from the OpenAI
//! `/v1/organization/costs` endpoint, following `next_page` cursors until the
//! API reports no more data, and summarizes the result.
//!
//! ## Overview
//!
//! A run walks the pages with [`paginate::Paginator`], folding every result into
//! a [`aggregate::TotalUsage`]. The returned [`report::RunReport`] is rendered
//! by [`display`] as text or JSON, and [`badges`] writes `TotalCost.json` and
//! `TotalEntry.json` in the shields.io endpoint schema.
//!
//! ## Features
//!
//! - `colors` (default): Enables terminal color output via owo-colors

/// Running totals and per-page aggregation
pub mod aggregate;

/// Badge JSON files
pub mod badges;

/// Command-line argument parsing
pub mod cli;

/// Credential and window resolution
pub mod config;

/// Blocking client for the organization costs endpoint
pub mod costs_api;

/// Text and JSON rendering of a run report
pub mod display;

/// Typed errors for configuration and page fetches
pub mod error;

/// Wire types for cost pages and badges
pub mod models;

/// Pagination state machine
pub mod paginate;

/// Structured outcome of a run
pub mod report;

/// Formatting helpers
pub mod utils;
