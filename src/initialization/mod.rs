//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - The logger (plain or JSON)
//! - The HTTP client (timeouts, user agent, redirect limit)

mod client;
mod logger;

// Re-export public API
pub use client::{init_client, MAX_REDIRECT_HOPS};
pub use logger::init_logger_with;
