//! Progress snapshots and end-of-run reports.
//!
//! Three files land in the output directory:
//! - `collection_progress.json`, overwritten after every batch
//! - `collected_tool_info.json`, the full run with a summary
//! - `collection_report.md`, a human-readable digest

mod markdown;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::collect::{BatchRun, BatchTiming, RunSummary, TierHistogram, ToolRecord};
use crate::config::{PROGRESS_FILE_NAME, REPORT_FILE_NAME, RESULTS_FILE_NAME};
use crate::error_handling::ReportError;

pub use markdown::render_markdown;

/// Snapshot written after each batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub current_batch: usize,
    pub total_batches: usize,
    pub total_tools: usize,
    pub success_count: usize,
    pub tier_histogram: TierHistogram,
    pub batches: Vec<BatchTiming>,
    pub timestamp: DateTime<Utc>,
}

/// Layout of `collected_tool_info.json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultsDocument<'a> {
    summary: RunSummary,
    tier_histogram: TierHistogram,
    batch_size: usize,
    inter_batch_delay_ms: u64,
    records: &'a [ToolRecord],
    batches: &'a [BatchTiming],
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
    generated_at: DateTime<Utc>,
}

/// Where a finished run's reports were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub results: PathBuf,
    pub markdown: PathBuf,
}

/// Writes run artifacts into one output directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Overwrites the progress snapshot.
    pub fn write_progress(
        &self,
        run: &BatchRun,
        current_batch: usize,
        total_batches: usize,
    ) -> Result<PathBuf, ReportError> {
        let progress = Progress {
            current_batch,
            total_batches,
            total_tools: run.records.len(),
            success_count: run.summary().successful,
            tier_histogram: run.tier_histogram,
            batches: run.batches.clone(),
            timestamp: Utc::now(),
        };
        let json = to_json(&progress, "progress snapshot")?;
        let path = self.write_file(PROGRESS_FILE_NAME, &json)?;
        debug!("Progress saved: {current_batch}/{total_batches}");
        Ok(path)
    }

    /// Writes the full JSON dump of `run`.
    pub fn write_results(&self, run: &BatchRun) -> Result<PathBuf, ReportError> {
        let document = ResultsDocument {
            summary: run.summary(),
            tier_histogram: run.tier_histogram,
            batch_size: run.batch_size,
            inter_batch_delay_ms: run.inter_batch_delay_ms,
            records: &run.records,
            batches: &run.batches,
            started_at: run.started_at,
            finished_at: run.finished_at,
            generated_at: Utc::now(),
        };
        let json = to_json(&document, "results")?;
        self.write_file(RESULTS_FILE_NAME, &json)
    }

    /// Writes the Markdown digest of `run`.
    pub fn write_markdown(&self, run: &BatchRun) -> Result<PathBuf, ReportError> {
        self.write_file(REPORT_FILE_NAME, &render_markdown(run, Utc::now()))
    }

    /// Writes both end-of-run reports.
    pub fn write_reports(&self, run: &BatchRun) -> Result<ReportPaths, ReportError> {
        Ok(ReportPaths {
            results: self.write_results(run)?,
            markdown: self.write_markdown(run)?,
        })
    }

    fn write_file(&self, file_name: &str, contents: &str) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ReportError::Io {
            path: self.output_dir.clone(),
            source,
        })?;
        let path = self.output_dir.join(file_name);
        fs::write(&path, contents).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

fn to_json<T: Serialize>(value: &T, what: &'static str) -> Result<String, ReportError> {
    serde_json::to_string_pretty(value).map_err(|source| ReportError::Serialize { what, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::Tool;

    fn sample_run() -> BatchRun {
        let tool = Tool {
            id: "planform".to_string(),
            name: "Planform".to_string(),
            url: "https://planform.example".to_string(),
        };
        let mut run = BatchRun::new(2, 2000);
        run.push_batch(
            BatchTiming {
                index: 0,
                tool_ids: vec![tool.id.clone()],
                started_at: Utc::now(),
                finished_at: Utc::now(),
            },
            vec![ToolRecord::failure(&tool, &tool.url, "HTTP status 500", None)],
        );
        run.finalize();
        run
    }

    #[test]
    fn test_write_progress_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path().join("nested/out"));
        let path = writer.write_progress(&sample_run(), 1, 3).unwrap();

        let progress: Progress =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(progress.current_batch, 1);
        assert_eq!(progress.total_batches, 3);
        assert_eq!(progress.total_tools, 1);
        assert_eq!(progress.success_count, 0);
        assert_eq!(progress.tier_histogram.level0, 1);
    }

    #[test]
    fn test_write_results_layout() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());
        let path = writer.write_results(&sample_run()).unwrap();
        assert_eq!(path.file_name().unwrap(), RESULTS_FILE_NAME);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["summary"]["total"], 1);
        assert_eq!(json["summary"]["failed"], 1);
        assert_eq!(json["tierHistogram"]["level0"], 1);
        assert_eq!(json["records"][0]["toolId"], "planform");
        assert!(json.get("generatedAt").is_some());
        assert_eq!(json["batches"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_write_reports_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ReportWriter::new(dir.path()).write_reports(&sample_run()).unwrap();
        assert!(paths.results.exists());
        assert!(fs::read_to_string(paths.markdown).unwrap().contains("Planform"));
    }

    #[test]
    fn test_unwritable_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let writer = ReportWriter::new(blocker.join("out"));
        assert!(matches!(
            writer.write_markdown(&sample_run()),
            Err(ReportError::Io { .. })
        ));
    }
}
