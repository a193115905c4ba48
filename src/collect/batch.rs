//! The state of one collection run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::ToolRecord;
use crate::analysis::Tier;

/// When one batch ran and which tools it held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchTiming {
    pub index: usize,
    pub tool_ids: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Record count per tier level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierHistogram {
    pub level0: usize,
    pub level1: usize,
    pub level2: usize,
    pub level3: usize,
}

impl TierHistogram {
    pub fn from_records(records: &[ToolRecord]) -> Self {
        let mut histogram = Self::default();
        for record in records {
            *histogram.slot(record.tier) += 1;
        }
        histogram
    }

    fn slot(&mut self, tier: Tier) -> &mut usize {
        match tier {
            Tier::Unreachable => &mut self.level0,
            Tier::Low => &mut self.level1,
            Tier::High => &mut self.level2,
            Tier::VeryHigh => &mut self.level3,
        }
    }

    pub fn count(&self, tier: Tier) -> usize {
        match tier {
            Tier::Unreachable => self.level0,
            Tier::Low => self.level1,
            Tier::High => self.level2,
            Tier::VeryHigh => self.level3,
        }
    }

    pub fn total(&self) -> usize {
        self.level0 + self.level1 + self.level2 + self.level3
    }
}

/// Totals reported at the top of the results file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// Mean fetch latency over all records; records without a fetch count as 0.
    pub average_latency_ms: u64,
}

/// Records and timings of one run, appended batch by batch in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRun {
    pub records: Vec<ToolRecord>,
    pub batch_size: usize,
    pub inter_batch_delay_ms: u64,
    pub tier_histogram: TierHistogram,
    pub batches: Vec<BatchTiming>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl BatchRun {
    pub fn new(batch_size: usize, inter_batch_delay_ms: u64) -> Self {
        Self {
            records: Vec::new(),
            batch_size,
            inter_batch_delay_ms,
            tier_histogram: TierHistogram::default(),
            batches: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Appends a finished batch. `records` must be in input order.
    pub fn push_batch(&mut self, timing: BatchTiming, records: Vec<ToolRecord>) {
        self.records.extend(records);
        self.batches.push(timing);
        self.tier_histogram = TierHistogram::from_records(&self.records);
    }

    pub fn summary(&self) -> RunSummary {
        let total = self.records.len();
        let successful = self
            .records
            .iter()
            .filter(|record| record.extraction_success)
            .count();
        let latency_sum: u64 = self
            .records
            .iter()
            .filter_map(|record| record.latency_ms)
            .sum();
        let average_latency_ms = if total == 0 {
            0
        } else {
            (latency_sum as f64 / total as f64).round() as u64
        };

        RunSummary {
            total,
            successful,
            failed: total - successful,
            average_latency_ms,
        }
    }

    /// Recomputes the histogram and stamps the finish time.
    pub fn finalize(&mut self) {
        self.tier_histogram = TierHistogram::from_records(&self.records);
        self.finished_at = Some(Utc::now());
    }

    pub fn is_finalized(&self) -> bool {
        self.finished_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::Tool;

    fn record(id: &str, tier: Tier, latency_ms: Option<u64>) -> ToolRecord {
        let tool = Tool {
            id: id.to_string(),
            name: id.to_string(),
            url: format!("https://{id}.example"),
        };
        let mut record = ToolRecord::failure(&tool, &tool.url, "unreachable", None);
        if tier != Tier::Unreachable {
            record.tier = tier;
            record.extraction_success = true;
            record.error_detail = None;
        }
        record.latency_ms = latency_ms;
        record
    }

    fn timing(index: usize, ids: &[&str]) -> BatchTiming {
        BatchTiming {
            index,
            tool_ids: ids.iter().map(|id| id.to_string()).collect(),
            started_at: Utc::now(),
            finished_at: Utc::now(),
        }
    }

    #[test]
    fn test_histogram_and_summary() {
        let mut run = BatchRun::new(2, 0);
        run.push_batch(
            timing(0, &["a", "b"]),
            vec![record("a", Tier::VeryHigh, Some(100)), record("b", Tier::Unreachable, Some(301))],
        );
        run.push_batch(timing(1, &["c"]), vec![record("c", Tier::Low, None)]);
        run.finalize();

        assert_eq!(
            run.tier_histogram,
            TierHistogram { level0: 1, level1: 1, level2: 0, level3: 1 }
        );
        assert_eq!(run.tier_histogram.total(), 3);
        assert_eq!(run.tier_histogram.count(Tier::High), 0);

        let summary = run.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.successful, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.average_latency_ms, 134);
        assert!(run.is_finalized());
    }

    #[test]
    fn test_records_keep_input_order() {
        let mut run = BatchRun::new(2, 0);
        run.push_batch(timing(0, &["a", "b"]), vec![record("a", Tier::Low, None), record("b", Tier::Low, None)]);
        run.push_batch(timing(1, &["c"]), vec![record("c", Tier::Low, None)]);
        let ids: Vec<_> = run.records.iter().map(|r| r.tool_id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_run_summary() {
        let summary = BatchRun::new(2, 2000).summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_latency_ms, 0);
    }

    #[test]
    fn test_histogram_serializes_level_keys() {
        let json = serde_json::to_value(TierHistogram { level0: 2, ..Default::default() }).unwrap();
        assert_eq!(json["level0"], 2);
        assert_eq!(json["level3"], 0);
    }
}
