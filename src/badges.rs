//! Shields-compatible summary files written after every run.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::aggregate::TotalUsage;
use crate::models::Badge;
use crate::utils::format_cost;

pub const TOTAL_COST_FILE: &str = "TotalCost.json";
pub const TOTAL_ENTRY_FILE: &str = "TotalEntry.json";

pub fn total_cost_badge(usage: &TotalUsage) -> Badge {
    Badge::new(
        "Total Cost for Last 30 Days",
        format!("${} USD", format_cost(usage.total_cost())),
        "blue",
    )
}

pub fn total_entries_badge(usage: &TotalUsage) -> Badge {
    Badge::new(
        "Total Entries for Last 30 Days",
        usage.entry_count().to_string(),
        "yellow",
    )
}

/// Serialize with 4-space indentation and no trailing newline.
pub fn badge_json(badge: &Badge) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    badge.serialize(&mut ser).context("serialize badge")?;
    Ok(buf)
}

/// Write both badge files into `dir`, replacing earlier ones.
pub fn write_badges(dir: &Path, usage: &TotalUsage) -> Result<[PathBuf; 2]> {
    let cost_path = dir.join(TOTAL_COST_FILE);
    let entry_path = dir.join(TOTAL_ENTRY_FILE);

    fs::write(&cost_path, badge_json(&total_cost_badge(usage))?)
        .with_context(|| format!("write {}", cost_path.display()))?;
    fs::write(&entry_path, badge_json(&total_entries_badge(usage))?)
        .with_context(|| format!("write {}", entry_path.display()))?;

    info!(
        cost = %cost_path.display(),
        entries = %entry_path.display(),
        "badge files written"
    );
    Ok([cost_path, entry_path])
}
