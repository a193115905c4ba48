//! Configuration constants.
//!
//! This module defines the defaults used throughout the collector: timeouts,
//! batch sizing, output file names and the placeholder strings emitted by the
//! extractors.

use std::time::Duration;

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Number of tools fetched concurrently in one batch.
///
/// Kept small on purpose: most tool sites sit behind the same handful of CDNs
/// and bursty traffic gets blocked quickly.
pub const DEFAULT_BATCH_SIZE: usize = 2;

/// Pause between two consecutive batches.
pub const DEFAULT_INTER_BATCH_DELAY: Duration = Duration::from_millis(2000);

/// Default User-Agent string for HTTP requests.
///
/// A Chrome-on-Windows string; many marketing sites serve a stripped page (or a
/// challenge page) to anything that does not look like a browser.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Response and body size limits
/// Maximum response body size in bytes (4MB)
/// Larger pages are truncated before extraction.
pub const MAX_RESPONSE_BODY_SIZE: usize = 4 * 1024 * 1024;

/// Maximum error message length stored in a record.
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;

// Output artifacts
/// Full JSON dump written at the end of a run
pub const RESULTS_FILE_NAME: &str = "collected_tool_info.json";
/// Human-readable Markdown report written at the end of a run
pub const REPORT_FILE_NAME: &str = "collection_report.md";
/// Progress snapshot, overwritten after every batch
pub const PROGRESS_FILE_NAME: &str = "collection_progress.json";

// Extractor placeholders
/// Returned by the description extractor when no candidate qualifies.
pub const DESCRIPTION_PLACEHOLDER: &str = "collecting…";
/// Returned (as a single-item list) when no feature could be extracted.
pub const FEATURES_PLACEHOLDER: &str = "feature details collecting…";
/// Fallback use case label.
pub const USE_CASE_PLACEHOLDER: &str = "Architectural design";
/// Fallback target user label.
pub const TARGET_USERS_PLACEHOLDER: &str = "Architecture and design professionals";
/// Fallback platform label.
pub const PLATFORM_PLACEHOLDER: &str = "Web";

/// Earliest founding year accepted by the company info extractor.
pub const MIN_FOUNDED_YEAR: i32 = 1990;
