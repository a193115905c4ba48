//! Error categorization.
//!
//! This module turns `reqwest` errors into the fetcher's `FetchFailure` values.

use super::types::FetchFailure;
use crate::config::TCP_CONNECT_TIMEOUT_SECS;

/// Categorizes a `reqwest::Error` into a `FetchFailure`.
///
/// Status errors are checked first (they only appear when
/// `error_for_status()` was used), then timeouts before connection errors.
/// reqwest flags a connect timeout as both a timeout and a connect error;
/// that case reports the connect timeout rather than the request timeout.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
/// * `timeout_secs` - The configured request timeout, echoed in the failure
pub fn categorize_reqwest_error(error: &reqwest::Error, timeout_secs: u64) -> FetchFailure {
    if let Some(status) = error.status() {
        return FetchFailure::Status(status.as_u16());
    }

    let message = crate::utils::sanitize::sanitize_and_truncate_error_message(&error.to_string());
    if error.is_timeout() {
        timeout_failure(error.is_connect(), timeout_secs)
    } else if error.is_connect() {
        FetchFailure::Connect(message)
    } else if error.is_body() || error.is_decode() {
        FetchFailure::Body(message)
    } else {
        FetchFailure::Request(message)
    }
}

/// Names the timeout that expired: the connect timeout while establishing
/// the connection, the request timeout afterwards.
fn timeout_failure(during_connect: bool, request_timeout_secs: u64) -> FetchFailure {
    if during_connect {
        FetchFailure::ConnectTimeout(TCP_CONNECT_TIMEOUT_SECS)
    } else {
        FetchFailure::Timeout(request_timeout_secs)
    }
}
