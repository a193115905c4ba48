//! Shared helpers for integration tests.

#![allow(dead_code)] // Each test binary uses a different subset

use std::sync::Arc;
use std::time::Duration;

use toolscout::{Fetcher, Tool};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const RICH_PAGE: &str = r#"<html><head>
<meta name="description" content="Planform turns rough sketches into detailed floor plans for architects and interior designers in minutes.">
</head><body>
<section class="hero"><h1>Floor plans from sketches</h1></section>
<section class="features"><ul>
<li>Automatic room detection from hand-drawn sketches</li>
<li>Export finished plans to common CAD formats</li>
</ul></section>
<p>Start a free trial, then subscribe monthly.</p>
<a href="https://twitter.com/planform">Twitter</a>
</body></html>"#;

pub fn fetcher(timeout_secs: u64) -> Fetcher {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .expect("client should build");
    Fetcher::new(Arc::new(client), timeout_secs)
}

pub fn tool(id: &str, url: String) -> Tool {
    Tool {
        id: id.to_string(),
        name: id.to_string(),
        url,
    }
}

/// Serves `body` at `route` after `delay`.
pub async fn mount_page(server: &MockServer, route: &str, body: &str, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// A localhost URL nothing listens on.
pub fn closed_port_url() -> String {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    format!("http://127.0.0.1:{port}/")
}

/// Pads `head` with an HTML comment to exactly `total` bytes.
pub fn padded_page(head: &str, total: usize) -> String {
    let mut html = format!("{head}<!-- ");
    while html.len() + 4 < total {
        html.push('x');
    }
    html.push_str(" -->");
    html
}
