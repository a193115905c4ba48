//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_INTER_BATCH_DELAY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which set of pattern tables and tier rules the collector uses.
///
/// `Basic` reproduces the first-generation collector: link-count tiering and a
/// short description/feature cascade filtered only against navigation words.
/// `Enhanced` adds class-based section analysis, the longer cascades and the
/// shared quality filter.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionProfile {
    /// Link-count tiering and short cascades
    Basic,
    /// Section-aware tiering, long cascades and quality filtering (default)
    #[default]
    Enhanced,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through `clap`.
///
/// # Examples
///
/// ```no_run
/// use toolscout::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("tools.json"),
///     batch_size: 3,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read tools from (JSON array or one tool per line)
    pub input: PathBuf,

    /// Directory receiving the JSON dump, Markdown report and progress file
    pub output_dir: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Tools fetched concurrently per batch
    pub batch_size: usize,

    /// Pause between batches
    pub inter_batch_delay: Duration,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Pattern tables and tier rules to use
    pub profile: ExtractionProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("tools.json"),
            output_dir: PathBuf::from("."),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            batch_size: DEFAULT_BATCH_SIZE,
            inter_batch_delay: DEFAULT_INTER_BATCH_DELAY,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            profile: ExtractionProfile::default(),
        }
    }
}

/// Command-line options.
///
/// Every option can also be provided through a `TOOLSCOUT_*` environment
/// variable (or a `.env` file next to the binary).
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// toolscout tools.json
///
/// # Three tools per batch, one second between batches
/// toolscout tools.txt --batch-size 3 --delay-ms 1000
///
/// # First-generation pattern tables, reports written to ./out
/// toolscout tools.json --profile basic --output-dir ./out
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "toolscout",
    about = "Collects structured listing data from AI tool websites."
)]
pub struct Opt {
    /// Tool list: a JSON array of {id, name, url} or one `[id] url [name]` per line
    #[arg(value_parser)]
    pub input: PathBuf,

    /// Directory for collected_tool_info.json, collection_report.md and collection_progress.json
    #[arg(long, value_parser, env = "TOOLSCOUT_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Tools fetched concurrently per batch
    #[arg(long, env = "TOOLSCOUT_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Pause between batches in milliseconds
    #[arg(
        long,
        env = "TOOLSCOUT_DELAY_MS",
        default_value_t = DEFAULT_INTER_BATCH_DELAY.as_millis() as u64
    )]
    pub delay_ms: u64,

    /// Per-request timeout in seconds
    #[arg(long, env = "TOOLSCOUT_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value.
    #[arg(long, env = "TOOLSCOUT_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Extraction profile: basic|enhanced
    #[arg(long, value_enum, env = "TOOLSCOUT_PROFILE", default_value_t = ExtractionProfile::Enhanced)]
    pub profile: ExtractionProfile,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            input: opt.input,
            output_dir: opt.output_dir,
            log_level: opt.log_level,
            log_format: opt.log_format,
            batch_size: opt.batch_size,
            inter_batch_delay: Duration::from_millis(opt.delay_ms),
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            profile: opt.profile,
        }
    }
}
