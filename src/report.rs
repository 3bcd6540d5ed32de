use serde::Serialize;

use crate::aggregate::TotalUsage;
use crate::models::CostResult;

/// Something worth telling the user about while walking the pages.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReportEvent {
    Bucket {
        page: usize,
        start_time: i64,
        end_time: i64,
        results: Vec<CostResult>,
    },
    NoValidData {
        page: usize,
    },
    MoreData {
        page: usize,
        next_page: Option<String>,
    },
}

/// Why the pagination loop ended.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum StopReason {
    /// The last page said there was nothing more.
    Completed,
    FetchFailed {
        page: usize,
        status: Option<u16>,
        error: String,
    },
    /// `has_more` without a usable `next_page`.
    MissingCursor { page: usize },
    CursorCycle { page: usize, cursor: String },
    PageLimit { limit: usize },
}

impl StopReason {
    pub fn is_complete(&self) -> bool {
        matches!(self, StopReason::Completed)
    }

    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, StopReason::FetchFailed { .. })
    }
}

/// Outcome of one pagination run, handed to the presentation layer.
#[derive(Serialize, Debug, Clone)]
pub struct RunReport {
    pub start_time: i64,
    pub pages_fetched: usize,
    pub usage: TotalUsage,
    pub events: Vec<ReportEvent>,
    pub stop: StopReason,
}
