//! Error type definitions.
//!
//! This module defines all error and warning types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised while loading the tool list.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file could not be read.
    #[error("Failed to read tool list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input looked like JSON but did not deserialize into tools.
    #[error("Failed to parse tool list {path} as JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A text line had no URL-looking token.
    #[error("Line {line} of {path} does not contain a URL")]
    MissingUrl { path: PathBuf, line: usize },
}

/// Errors raised while writing progress snapshots and reports.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Creating the output directory or writing a file failed.
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing a report to JSON failed.
    #[error("Failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a single fetch attempt did not yield a usable page.
///
/// Every variant is non-fatal: the orchestrator records it on the tool's
/// record and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FetchFailure {
    /// DNS, TCP or TLS level failure.
    #[error("connection error: {0}")]
    Connect(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The TCP connection was not established within the connect timeout.
    #[error("connection timed out after {0}s")]
    ConnectTimeout(u64),

    /// The server answered with a non-2xx status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// Headers arrived but the body could not be read or decoded.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Anything else reqwest reports (builder, redirect loop, ...).
    #[error("request error: {0}")]
    Request(String),
}

impl FetchFailure {
    /// Maps the failure onto the statistics category it is counted under.
    pub fn error_type(&self) -> ErrorType {
        match self {
            FetchFailure::Connect(_) => ErrorType::HttpConnectError,
            FetchFailure::Timeout(_) | FetchFailure::ConnectTimeout(_) => {
                ErrorType::HttpTimeoutError
            }
            FetchFailure::Status(403) => ErrorType::HttpBotDetection,
            FetchFailure::Status(404) => ErrorType::HttpNotFound,
            FetchFailure::Status(429) => ErrorType::HttpTooManyRequests,
            FetchFailure::Status(code) if *code >= 500 => ErrorType::HttpServerError,
            FetchFailure::Status(_) => ErrorType::HttpStatusError,
            FetchFailure::Body(_) => ErrorType::HttpBodyError,
            FetchFailure::Request(_) => ErrorType::HttpOtherError,
        }
    }
}

/// Types of errors that can occur while processing one tool.
///
/// These categorize failures that leave a tool with a tier-0 record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Input errors
    InvalidUrl,
    // HTTP/Network errors
    HttpConnectError,
    HttpTimeoutError,
    HttpStatusError,
    HttpBotDetection, // 403 Forbidden - typically bot detection
    HttpNotFound,
    HttpTooManyRequests,
    HttpServerError,
    HttpBodyError,
    HttpOtherError,
    // Task failures
    PipelinePanic,
}

/// Types of warnings that can occur while extracting fields.
///
/// Warnings indicate a field fell back to its placeholder; the tool itself is
/// still recorded as a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants describe a placeholder fallback
pub enum WarningType {
    PlaceholderDescription,
    PlaceholderFeatures,
    PlaceholderPricing,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidUrl => "Invalid URL",
            ErrorType::HttpConnectError => "HTTP connect error",
            ErrorType::HttpTimeoutError => "HTTP request timeout",
            ErrorType::HttpStatusError => "HTTP status error",
            ErrorType::HttpBotDetection => "Bot detection (403 Forbidden)",
            ErrorType::HttpNotFound => "Not Found (404)",
            ErrorType::HttpTooManyRequests => "Too many requests (429)",
            ErrorType::HttpServerError => "Server error (5xx)",
            ErrorType::HttpBodyError => "HTTP body error",
            ErrorType::HttpOtherError => "HTTP request other error",
            ErrorType::PipelinePanic => "Collection task panicked",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::PlaceholderDescription => "Description fell back to placeholder",
            WarningType::PlaceholderFeatures => "Features fell back to placeholder",
            WarningType::PlaceholderPricing => "Pricing fell back to placeholder",
        }
    }
}
