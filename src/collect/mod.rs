//! Collection orchestration.
//!
//! Tools are processed in batches of `batch_size`. Every tool of a batch runs
//! in its own task; the batch is awaited as a whole, its records are appended
//! in input order, a progress snapshot is written, and the pacing policy
//! decides the pause before the next batch. Each tool moves through
//! `Pending → Assessed → Skipped | Collecting → Recorded`, and whatever goes
//! wrong along the way ends as a tier-0 record rather than an error.

mod batch;
mod depth;
mod pacing;
mod record;

use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze_with, Assessment};
use crate::app::validate_and_normalize_url;
use crate::error_handling::{ErrorType, ProcessingStats};
use crate::extract::{Extractor, Page};
use crate::fetch::{FetchResult, Fetcher};
use crate::report::ReportWriter;

pub use batch::{BatchRun, BatchTiming, RunSummary, TierHistogram};
pub use depth::{extract_fields, ExtractionDepth};
pub use pacing::{BatchPacing, FixedDelay, NoDelay};
pub use record::{FieldName, FieldValue, ToolRecord};

/// One entry of the input tool list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub url: String,
}

/// Drives fetch, analysis and extraction over a tool list.
#[derive(Debug)]
pub struct Collector {
    fetcher: Fetcher,
    extractor: Extractor,
    batch_size: usize,
    pacing: Arc<dyn BatchPacing>,
    stats: Arc<ProcessingStats>,
    progress: Option<ReportWriter>,
}

impl Collector {
    /// A `batch_size` of zero is treated as one.
    pub fn new(fetcher: Fetcher, extractor: Extractor, batch_size: usize) -> Self {
        Self {
            fetcher,
            extractor,
            batch_size: batch_size.max(1),
            pacing: Arc::new(FixedDelay::default()),
            stats: Arc::new(ProcessingStats::new()),
            progress: None,
        }
    }

    pub fn with_pacing(mut self, pacing: impl BatchPacing + 'static) -> Self {
        self.pacing = Arc::new(pacing);
        self
    }

    /// Writes a progress snapshot through `writer` after every batch.
    pub fn with_progress(mut self, writer: ReportWriter) -> Self {
        self.progress = Some(writer);
        self
    }

    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    /// Collects every tool and returns the finalized run.
    ///
    /// The returned run always holds exactly one record per tool, in input
    /// order.
    pub async fn collect_all(&self, tools: &[Tool]) -> BatchRun {
        let mut run = BatchRun::new(
            self.batch_size,
            self.pacing.pause_after(0).as_millis() as u64,
        );
        let total_batches = tools.len().div_ceil(self.batch_size);
        info!(
            "Collecting {} tool{} in {} batch{} of up to {}",
            tools.len(),
            if tools.len() == 1 { "" } else { "s" },
            total_batches,
            if total_batches == 1 { "" } else { "es" },
            self.batch_size
        );

        for (index, batch) in tools.chunks(self.batch_size).enumerate() {
            info!("Batch {}/{}", index + 1, total_batches);
            let started_at = Utc::now();

            let handles: Vec<_> = batch
                .iter()
                .cloned()
                .map(|tool| {
                    tokio::spawn(process_tool(
                        self.fetcher.clone(),
                        self.extractor,
                        tool,
                        Arc::clone(&self.stats),
                    ))
                })
                .collect();

            let records = join_all(handles)
                .await
                .into_iter()
                .zip(batch)
                .map(|(joined, tool)| {
                    joined.unwrap_or_else(|e| {
                        warn!("Collection task for {} failed: {e}", tool.id);
                        self.stats.increment_error(ErrorType::PipelinePanic);
                        ToolRecord::failure(
                            tool,
                            &tool.url,
                            &format!("collection task failed: {e}"),
                            None,
                        )
                    })
                })
                .collect();

            run.push_batch(
                BatchTiming {
                    index,
                    tool_ids: batch.iter().map(|tool| tool.id.clone()).collect(),
                    started_at,
                    finished_at: Utc::now(),
                },
                records,
            );

            if let Some(writer) = &self.progress {
                if let Err(e) = writer.write_progress(&run, index + 1, total_batches) {
                    warn!("Failed to write progress snapshot: {e}");
                }
            }

            if index + 1 < total_batches {
                let pause = self.pacing.pause_after(index);
                if !pause.is_zero() {
                    debug!("Pausing {}ms before next batch", pause.as_millis());
                    tokio::time::sleep(pause).await;
                }
            }
        }

        run.finalize();
        run
    }
}

/// Fetches, assesses and extracts one tool.
async fn process_tool(
    fetcher: Fetcher,
    extractor: Extractor,
    tool: Tool,
    stats: Arc<ProcessingStats>,
) -> ToolRecord {
    let Some(url) = validate_and_normalize_url(&tool.url) else {
        stats.increment_error(ErrorType::InvalidUrl);
        return ToolRecord::failure(&tool, &tool.url, &format!("invalid URL: {}", tool.url), None);
    };

    let fetch = fetcher.fetch(&url).await;
    match (&fetch.failure, fetch.body.as_deref()) {
        (None, Some(html)) if fetch.succeeded => {
            record_page(&extractor, &tool, &url, &fetch, html, &stats)
        }
        (failure, _) => {
            let reason = fetch
                .failure_reason()
                .unwrap_or_else(|| "fetch returned no body".to_string());
            if let Some(failure) = failure {
                stats.increment_error(failure.error_type());
            }
            info!("✗ {} unreachable: {reason}", tool.id);
            ToolRecord::failure(&tool, &url, &reason, Some(&fetch))
        }
    }
}

/// Assesses the fetched page and runs the extractors its tier calls for.
fn record_page(
    extractor: &Extractor,
    tool: &Tool,
    url: &str,
    fetch: &FetchResult,
    html: &str,
    stats: &ProcessingStats,
) -> ToolRecord {
    let analysis = analyze_with(html, extractor.profile());
    let assessment = Assessment::reachable(&tool.id, url, analysis);

    let fields = match ExtractionDepth::for_tier(assessment.tier) {
        Some(depth) => {
            let page = Page::parse(html);
            extract_fields(extractor, &page, &depth, stats)
        }
        None => Default::default(),
    };

    info!(
        "✓ {}: tier {} ({}), {} field{}",
        tool.id,
        assessment.tier,
        assessment.detected_framework,
        fields.len(),
        if fields.len() == 1 { "" } else { "s" }
    );
    ToolRecord::collected(tool, &assessment, fetch, fields)
}
