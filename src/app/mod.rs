//! Application-level helpers.
//!
//! This module provides URL validation, tool list loading and statistics
//! printing used by the collector and the binary.

pub mod input;
pub mod statistics;
pub mod url;

// Re-export public API
pub use input::{load_tools, parse_tools};
pub use statistics::{print_error_statistics, print_final_statistics};
pub use url::validate_and_normalize_url;
