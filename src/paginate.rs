//! Page-walking state machine over a [`CostSource`].

use std::collections::HashSet;
use tracing::{info, warn};

use crate::aggregate::{TotalUsage, aggregate_page};
use crate::costs_api::CostSource;
use crate::models::CostPage;
use crate::report::{ReportEvent, RunReport, StopReason};

/// Upper bound on pages fetched in one run.
pub const MAX_PAGES: usize = 1000;

enum State {
    Fetching { cursor: Option<String> },
    Aggregating { page: CostPage },
    Done(StopReason),
}

pub struct Paginator<'a, S: CostSource + ?Sized> {
    source: &'a S,
    start_time: i64,
    max_pages: usize,
}

impl<'a, S: CostSource + ?Sized> Paginator<'a, S> {
    pub fn new(source: &'a S, start_time: i64) -> Self {
        Paginator {
            source,
            start_time,
            max_pages: MAX_PAGES,
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Fetch and aggregate pages until the API runs out or something stops us.
    ///
    /// Never fails: fetch errors end the loop and are recorded as the stop
    /// reason, with everything gathered so far kept in the report.
    pub fn run(&self) -> RunReport {
        let mut usage = TotalUsage::new();
        let mut events: Vec<ReportEvent> = Vec::new();
        let mut seen_cursors: HashSet<String> = HashSet::new();
        let mut pages_fetched = 0usize;
        let mut state = State::Fetching { cursor: None };

        let stop = loop {
            state = match state {
                State::Fetching { cursor } => {
                    if pages_fetched >= self.max_pages {
                        warn!(limit = self.max_pages, "page limit reached, stopping");
                        State::Done(StopReason::PageLimit {
                            limit: self.max_pages,
                        })
                    } else {
                        let page_number = pages_fetched + 1;
                        match self.source.fetch_page(self.start_time, cursor.as_deref()) {
                            Ok(page) => {
                                pages_fetched = page_number;
                                State::Aggregating { page }
                            }
                            Err(e) => {
                                warn!(page = page_number, error = %e, "costs request failed");
                                State::Done(StopReason::FetchFailed {
                                    page: page_number,
                                    status: e.status_code(),
                                    error: e.to_string(),
                                })
                            }
                        }
                    }
                }
                State::Aggregating { page } => {
                    aggregate_page(pages_fetched, &page, &mut usage, &mut events);
                    info!(
                        page = pages_fetched,
                        entries = usage.entry_count(),
                        total_cost = usage.total_cost(),
                        has_more = page.has_more,
                        "page aggregated"
                    );
                    if !page.has_more {
                        State::Done(StopReason::Completed)
                    } else {
                        match page.next_cursor() {
                            None => {
                                warn!(page = pages_fetched, "has_more set without next_page");
                                State::Done(StopReason::MissingCursor {
                                    page: pages_fetched,
                                })
                            }
                            Some(cursor) if !seen_cursors.insert(cursor.to_string()) => {
                                warn!(page = pages_fetched, cursor, "cursor repeated");
                                State::Done(StopReason::CursorCycle {
                                    page: pages_fetched,
                                    cursor: cursor.to_string(),
                                })
                            }
                            Some(cursor) => State::Fetching {
                                cursor: Some(cursor.to_string()),
                            },
                        }
                    }
                }
                State::Done(reason) => break reason,
            };
        };

        RunReport {
            start_time: self.start_time,
            pages_fetched,
            usage,
            events,
            stop,
        }
    }
}
