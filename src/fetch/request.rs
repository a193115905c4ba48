//! Browser-like request headers.

/// Headers sent with every page fetch, mimicking a desktop Chrome navigation.
///
/// Many tool landing pages sit behind CDNs that serve a challenge page to
/// clients without the usual navigation headers. The User-Agent itself is set
/// on the client.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    pub(crate) const ACCEPT: &'static str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
    pub(crate) const ACCEPT_LANGUAGE: &'static str = "en-US,en;q=0.9";

    /// Applies the navigation headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::ACCEPT, Self::ACCEPT)
            .header(reqwest::header::ACCEPT_LANGUAGE, Self::ACCEPT_LANGUAGE)
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-dest"),
                "document",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-mode"),
                "navigate",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-site"),
                "none",
            )
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
            .header(reqwest::header::CACHE_CONTROL, "max-age=0")
    }
}
