//! Utility functions shared across modules.
//!
//! This module provides:
//! - String sanitization utilities for error details
//! - CSS selector and regex compilation helpers for static tables

pub mod sanitize;
mod selector;

pub use selector::{compile_regex_unsafe, parse_selector_unsafe};
