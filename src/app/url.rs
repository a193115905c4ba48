//! Tool URL validation and normalization.

use log::warn;
use regex::Regex;
use std::sync::LazyLock;

use crate::utils::compile_regex_unsafe;

/// Longest URL accepted, matching common browser and server limits.
const MAX_URL_LENGTH: usize = 2048;

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"^[A-Za-z][A-Za-z0-9+.-]*://", "SCHEME_RE"));

/// Validates and normalizes a tool URL.
///
/// Surrounding whitespace is trimmed and `https://` is prepended when no
/// scheme is given; an explicit scheme is kept as written. The result must
/// parse, use `http` or `https`, have a host and stay within
/// [`MAX_URL_LENGTH`]. Logs a warning and returns `None` otherwise.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        warn!("Skipping empty tool URL");
        return None;
    }

    let normalized = if SCHEME_RE.is_match(url) {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        let preview: String = normalized.chars().take(50).collect();
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {preview}...",
            normalized.len(),
            MAX_URL_LENGTH
        );
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) if parsed.host_str().is_some_and(|host| !host.is_empty()) => {
            match parsed.scheme() {
                "http" | "https" => Some(normalized),
                _ => {
                    warn!("Skipping unsupported scheme for URL: {url}");
                    None
                }
            }
        }
        Ok(_) => {
            warn!("Skipping URL without a host: {url}");
            None
        }
        Err(e) => {
            warn!("Skipping invalid URL {url}: {e}");
            None
        }
    }
}
