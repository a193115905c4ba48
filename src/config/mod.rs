//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, batch sizing, output file names)
//! - Placeholder strings used by the extractors
//! - Library configuration and CLI option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ExtractionProfile, LogFormat, LogLevel, Opt};
