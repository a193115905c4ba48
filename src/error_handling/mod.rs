//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions and categorization
//! - Processing statistics tracking (errors and placeholder warnings)
//!
//! Error types are categorized into:
//! - **Errors**: Failures that leave a tool with a tier-0 record
//! - **Warnings**: Fields that fell back to a placeholder

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ProcessingStats;
pub use types::{
    ErrorType, FetchFailure, InitializationError, InputError, ReportError, WarningType,
};
