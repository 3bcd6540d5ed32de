#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

// Provide a no-op color shim when "colors" feature is disabled
#[cfg(not(feature = "colors"))]
pub mod color_shim {
    use std::fmt::{self, Display, Formatter};

    #[derive(Clone)]
    pub struct Plain(pub String);

    impl Display for Plain {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    pub trait ColorizeShim {
        fn as_str(&self) -> &str;

        fn bright_black(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn bright_cyan(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn bright_green(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn red(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn yellow(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn bold(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn dimmed(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn cyan(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
    }

    impl ColorizeShim for &str {
        fn as_str(&self) -> &str {
            self
        }
    }
    impl ColorizeShim for String {
        fn as_str(&self) -> &str {
            self.as_str()
        }
    }
    impl ColorizeShim for Plain {
        fn as_str(&self) -> &str {
            &self.0
        }
    }
}

#[cfg(not(feature = "colors"))]
use color_shim::ColorizeShim as OwoColorize;

use crate::badges::{TOTAL_COST_FILE, TOTAL_ENTRY_FILE, total_cost_badge, total_entries_badge};
use crate::report::{ReportEvent, RunReport, StopReason};
use crate::utils::{format_cost, format_utc};

pub fn query_banner(start_time: i64) -> String {
    format!(
        "Querying cost and usage data from {} to now...",
        format_utc(start_time)
    )
}

fn stop_notice(stop: &StopReason) -> Option<String> {
    match stop {
        StopReason::Completed => None,
        StopReason::FetchFailed { error, .. } => Some(format!(
            "{}\n{}",
            error.as_str().red(),
            "Failed to retrieve cost and usage information.".red().bold()
        )),
        StopReason::MissingCursor { page } => Some(
            format!("Page {page} reported more data but no next_page cursor; stopping.")
                .yellow()
                .to_string(),
        ),
        StopReason::CursorCycle { page, cursor } => Some(
            format!("Page {page} repeated cursor {cursor}; stopping to avoid a loop.")
                .yellow()
                .to_string(),
        ),
        StopReason::PageLimit { limit } => Some(
            format!("Stopped after {limit} pages.")
                .yellow()
                .to_string(),
        ),
    }
}

/// Human-readable lines for a finished run, in the order they happened.
pub fn build_text_output(report: &RunReport) -> Vec<String> {
    let mut lines = Vec::new();

    for event in &report.events {
        match event {
            ReportEvent::Bucket {
                start_time,
                end_time,
                results,
                ..
            } => {
                lines.push(
                    format!(
                        "Time Range: {} to {}",
                        format_utc(*start_time),
                        format_utc(*end_time)
                    )
                    .bright_cyan()
                    .to_string(),
                );
                for result in results {
                    lines.push(format!(
                        "  - Cost: {}",
                        format!(
                            "${} {}",
                            format_cost(result.amount.value),
                            result.amount.currency
                        )
                        .bright_green()
                    ));
                    lines.push(format!("    Line Item: {}", result.line_item_label()));
                    lines.push(format!("    Project ID: {}", result.project_label()));
                }
            }
            ReportEvent::NoValidData { .. } => {
                lines.push("No valid cost data available.".yellow().to_string());
            }
            ReportEvent::MoreData { page, .. } => {
                lines.push(
                    format!("Page {page} reported more data; continued with the next page.")
                        .dimmed()
                        .to_string(),
                );
            }
        }
    }

    if let Some(notice) = stop_notice(&report.stop) {
        lines.push(notice);
    }

    lines.push(String::new());
    lines.push("Summary of Usage for Last 30 Days:".bold().to_string());
    lines.push(format!(
        "Total Cost: ${} USD",
        format_cost(report.usage.total_cost())
    ));
    lines.push(format!("Total Entries: {}", report.usage.entry_count()));
    lines
}

pub fn print_text_output(report: &RunReport) {
    for line in build_text_output(report) {
        println!("{line}");
    }
}

pub fn badges_written_notice() -> String {
    format!("Summary JSON files created: {TOTAL_COST_FILE} and {TOTAL_ENTRY_FILE}")
}

pub fn build_json_output(report: &RunReport) -> serde_json::Value {
    serde_json::json!({
        "window": {
            "start_time": report.start_time,
            "start": format_utc(report.start_time),
            "days": crate::config::LOOKBACK_DAYS,
        },
        "pages_fetched": report.pages_fetched,
        "complete": report.stop.is_complete(),
        "stop": report.stop,
        "summary": {
            "total_cost": report.usage.total_cost(),
            "total_cost_display": format!("${} USD", format_cost(report.usage.total_cost())),
            "total_entries": report.usage.entry_count(),
        },
        "events": report.events,
        "badges": {
            TOTAL_COST_FILE: total_cost_badge(&report.usage),
            TOTAL_ENTRY_FILE: total_entries_badge(&report.usage),
        },
    })
}

pub fn print_json_output(report: &RunReport) -> anyhow::Result<()> {
    let json = build_json_output(report);
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
