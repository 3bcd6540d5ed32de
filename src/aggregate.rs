//! Accumulation of cost results across pages.

use serde::Serialize;

use crate::models::{CostPage, CostResult};
use crate::report::ReportEvent;

/// Running totals for one report run.
///
/// Results only enter through [`TotalUsage::record`], so `total_cost` is always
/// the sum of `entries[i].amount.value` and `entries` only grows.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct TotalUsage {
    total_cost: f64,
    entries: Vec<CostResult>,
}

impl TotalUsage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: CostResult) {
        self.total_cost += result.amount.value;
        self.entries.push(result);
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn entries(&self) -> &[CostResult] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Fold one page into `usage`, appending what was seen to `events`.
///
/// `page_number` is 1-based and only used to label events.
pub fn aggregate_page(
    page_number: usize,
    page: &CostPage,
    usage: &mut TotalUsage,
    events: &mut Vec<ReportEvent>,
) {
    let Some(buckets) = page.buckets() else {
        events.push(ReportEvent::NoValidData { page: page_number });
        return;
    };

    for bucket in buckets {
        if bucket.results.is_empty() {
            continue;
        }
        for result in &bucket.results {
            usage.record(result.clone());
        }
        events.push(ReportEvent::Bucket {
            page: page_number,
            start_time: bucket.start_time,
            end_time: bucket.end_time,
            results: bucket.results.clone(),
        });
    }

    if page.has_more {
        events.push(ReportEvent::MoreData {
            page: page_number,
            next_page: page.next_page.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostAmount, CostBucket};

    fn result(value: f64, line_item: &str) -> CostResult {
        CostResult {
            amount: CostAmount {
                value,
                currency: "usd".to_string(),
            },
            line_item: Some(line_item.to_string()),
            project_id: Some("proj_1".to_string()),
        }
    }

    fn page(buckets: Vec<CostBucket>, has_more: bool) -> CostPage {
        CostPage {
            data: Some(buckets),
            has_more,
            next_page: has_more.then(|| "page_2".to_string()),
        }
    }

    #[test]
    fn totals_follow_every_recorded_result() {
        let mut usage = TotalUsage::new();
        let mut events = Vec::new();
        let p = page(
            vec![
                CostBucket {
                    start_time: 1_700_000_000,
                    end_time: 1_700_086_400,
                    results: vec![result(0.5, "gpt-4o, input"), result(0.25, "gpt-4o, output")],
                },
                CostBucket {
                    start_time: 1_700_086_400,
                    end_time: 1_700_172_800,
                    results: vec![result(1.125, "embeddings")],
                },
            ],
            false,
        );

        aggregate_page(1, &p, &mut usage, &mut events);

        assert_eq!(usage.entry_count(), 3);
        let sum: f64 = usage.entries().iter().map(|e| e.amount.value).sum();
        assert!((usage.total_cost() - sum).abs() < 1e-9);
        assert!((usage.total_cost() - 1.875).abs() < 1e-9);
        assert_eq!(usage.entries()[2].line_item_label(), "embeddings");
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ReportEvent::Bucket { page: 1, .. }));
    }

    #[test]
    fn empty_data_leaves_usage_untouched() {
        let mut usage = TotalUsage::new();
        usage.record(result(2.0, "existing"));
        let before = usage.clone();
        let mut events = Vec::new();

        aggregate_page(4, &page(Vec::new(), false), &mut usage, &mut events);

        assert_eq!(usage, before);
        assert_eq!(events, vec![ReportEvent::NoValidData { page: 4 }]);
    }

    #[test]
    fn missing_data_reports_no_valid_data_even_with_more_pages() {
        let mut usage = TotalUsage::new();
        let mut events = Vec::new();
        let p = CostPage {
            data: None,
            has_more: true,
            next_page: Some("page_2".to_string()),
        };

        aggregate_page(1, &p, &mut usage, &mut events);

        assert_eq!(usage.entry_count(), 0);
        assert_eq!(events, vec![ReportEvent::NoValidData { page: 1 }]);
    }

    #[test]
    fn buckets_without_results_are_skipped() {
        let mut usage = TotalUsage::new();
        let mut events = Vec::new();
        let p = page(
            vec![
                CostBucket {
                    start_time: 1,
                    end_time: 2,
                    results: Vec::new(),
                },
                CostBucket {
                    start_time: 2,
                    end_time: 3,
                    results: vec![result(0.1, "tts")],
                },
            ],
            true,
        );

        aggregate_page(2, &p, &mut usage, &mut events);

        assert_eq!(usage.entry_count(), 1);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            ReportEvent::Bucket {
                start_time: 2,
                end_time: 3,
                ..
            }
        ));
        assert_eq!(
            events[1],
            ReportEvent::MoreData {
                page: 2,
                next_page: Some("page_2".to_string())
            }
        );
    }
}
