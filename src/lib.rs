//! toolscout library: AI tool page tiering and listing-field extraction
//!
//! This library fetches the marketing page of every tool in a list, grades
//! how much information the page holds into a tier (0 to 3), and extracts
//! listing fields (description, features, pricing, use cases, audience,
//! platforms, company facts, social links) as deep as the tier allows.
//! Results are written as a JSON dump and a Markdown report.
//!
//! # Example
//!
//! ```no_run
//! use toolscout::{run_collection, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("tools.json"),
//!     batch_size: 2,
//!     ..Default::default()
//! };
//!
//! let report = run_collection(config).await?;
//! println!("Collected {} tools: {} succeeded, {} failed",
//!          report.summary.total, report.summary.successful, report.summary.failed);
//! # Ok(())
//! # }
//! ```
//!
//! The building blocks are usable on their own: [`analysis::analyze`] is a
//! pure function of the HTML, and [`extract::Extractor`] runs individual field
//! extractors over a parsed [`extract::Page`].
//!
//! # Requirements
//!
//! The collector requires a Tokio runtime.

pub mod analysis;
pub mod app;
pub mod collect;
pub mod config;
pub mod error_handling;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod report;
mod utils;

// Re-export public API
pub use analysis::{analyze, analyze_with, Assessment, PageAnalysis, Tier};
pub use collect::{BatchRun, Collector, FieldName, FieldValue, RunSummary, Tool, ToolRecord};
pub use config::{Config, ExtractionProfile, LogFormat, LogLevel};
pub use extract::{Extraction, Extractor, Page};
pub use fetch::{FetchResult, Fetcher};
pub use report::ReportWriter;
pub use run::{run_collection, CollectionReport};

// Entry point tying the modules together for one run
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::app::{load_tools, print_final_statistics};
    use crate::collect::{BatchRun, Collector, FixedDelay, RunSummary};
    use crate::config::Config;
    use crate::extract::Extractor;
    use crate::fetch::Fetcher;
    use crate::initialization::init_client;
    use crate::report::{ReportPaths, ReportWriter};

    /// Outcome of a completed collection run.
    #[derive(Debug, Clone)]
    pub struct CollectionReport {
        /// Totals over all records
        pub summary: RunSummary,
        /// Path of the JSON dump
        pub results_path: PathBuf,
        /// Path of the Markdown report
        pub markdown_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
        /// The full run
        pub run: BatchRun,
    }

    /// Runs a collection with the provided configuration.
    ///
    /// Reads the tool list, collects every tool in batches, writes a progress
    /// snapshot after each batch and the JSON and Markdown reports at the end.
    /// Individual tool failures never fail the run; only unreadable input,
    /// client setup or unwritable reports do.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool list cannot be loaded, the HTTP client
    /// cannot be built, or the final reports cannot be written.
    pub async fn run_collection(config: Config) -> Result<CollectionReport> {
        let start = Instant::now();

        let tools = load_tools(&config.input).context("Failed to load tool list")?;
        info!(
            "Loaded {} tools from {} (profile: {:?})",
            tools.len(),
            config.input.display(),
            config.profile
        );

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let writer = ReportWriter::new(&config.output_dir);
        let collector = Collector::new(
            Fetcher::new(client, config.timeout_seconds),
            Extractor::new(config.profile),
            config.batch_size,
        )
        .with_pacing(FixedDelay(config.inter_batch_delay))
        .with_progress(writer.clone());

        let run = collector.collect_all(&tools).await;

        let ReportPaths { results, markdown } = writer
            .write_reports(&run)
            .context("Failed to write collection reports")?;
        info!("Results saved to {}", results.display());
        info!("Report saved to {}", markdown.display());

        let elapsed_seconds = start.elapsed().as_secs_f64();
        print_final_statistics(&run, collector.stats(), elapsed_seconds);

        Ok(CollectionReport {
            summary: run.summary(),
            results_path: results,
            markdown_path: markdown,
            elapsed_seconds,
            run,
        })
    }
}
