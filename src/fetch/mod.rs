//! Page fetching.
//!
//! One GET per call, whole body buffered, no retries. Every failure mode is
//! returned as a [`FetchFailure`] inside the [`FetchResult`]; nothing here is
//! fatal to the run.

mod request;

use std::sync::Arc;
use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::{categorize_reqwest_error, FetchFailure};
use request::RequestHeaders;

/// Outcome of one fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub succeeded: bool,
    pub status_code: Option<u16>,
    pub body: Option<String>,
    pub latency_ms: u64,
    pub failure: Option<FetchFailure>,
}

impl FetchResult {
    fn success(status: u16, body: String, latency_ms: u64) -> Self {
        Self {
            succeeded: true,
            status_code: Some(status),
            body: Some(body),
            latency_ms,
            failure: None,
        }
    }

    fn failure(failure: FetchFailure, status_code: Option<u16>, latency_ms: u64) -> Self {
        Self {
            succeeded: false,
            status_code,
            body: None,
            latency_ms,
            failure: Some(failure),
        }
    }

    /// Human-readable failure reason, `None` for a successful fetch.
    pub fn failure_reason(&self) -> Option<String> {
        self.failure.as_ref().map(ToString::to_string)
    }
}

/// Fetches tool pages over a shared client.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Arc<reqwest::Client>,
    timeout_secs: u64,
}

impl Fetcher {
    /// `timeout_secs` must match the timeout the client was built with; it is
    /// only used to describe timeouts.
    pub fn new(client: Arc<reqwest::Client>, timeout_secs: u64) -> Self {
        Self {
            client,
            timeout_secs,
        }
    }

    /// GETs `url` and buffers the body.
    ///
    /// Non-2xx answers are failures carrying the status code. Bodies longer
    /// than [`MAX_RESPONSE_BODY_SIZE`] are truncated.
    pub async fn fetch(&self, url: &str) -> FetchResult {
        let start = Instant::now();
        let elapsed_ms = |start: Instant| start.elapsed().as_millis() as u64;

        let request = RequestHeaders::apply_to_request_builder(self.client.get(url));
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let failure = categorize_reqwest_error(&e, self.timeout_secs);
                debug!("Fetch of {url} failed: {failure}");
                return FetchResult::failure(failure, None, elapsed_ms(start));
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!("Fetch of {url} returned {status}");
            return FetchResult::failure(
                FetchFailure::Status(status.as_u16()),
                Some(status.as_u16()),
                elapsed_ms(start),
            );
        }

        match response.text().await {
            Ok(mut body) => {
                truncate_body(&mut body, MAX_RESPONSE_BODY_SIZE);
                let latency_ms = elapsed_ms(start);
                debug!(
                    "Fetched {url}: {} bytes in {latency_ms}ms",
                    body.len()
                );
                FetchResult::success(status.as_u16(), body, latency_ms)
            }
            Err(e) => FetchResult::failure(
                categorize_reqwest_error(&e, self.timeout_secs),
                Some(status.as_u16()),
                elapsed_ms(start),
            ),
        }
    }
}

/// Cuts `body` to at most `max` bytes on a char boundary.
fn truncate_body(body: &mut String, max: usize) {
    if body.len() <= max {
        return;
    }
    let mut cut = max;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    body.truncate(cut);
}
