//! Site framework fingerprinting.
//!
//! Markers are checked against the lowercased HTML in table order, most
//! specific platform first, so a Next.js page is not reported as plain React.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Framework or site builder a page appears to be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter)]
pub enum Framework {
    #[serde(rename = "Next.js")]
    NextJs,
    Gatsby,
    WordPress,
    Webflow,
    Squarespace,
    Wix,
    React,
    Vue,
    Angular,
    #[default]
    Unknown,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::NextJs => "Next.js",
            Framework::Gatsby => "Gatsby",
            Framework::WordPress => "WordPress",
            Framework::Webflow => "Webflow",
            Framework::Squarespace => "Squarespace",
            Framework::Wix => "Wix",
            Framework::React => "React",
            Framework::Vue => "Vue",
            Framework::Angular => "Angular",
            Framework::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase substrings that identify each framework.
pub const FRAMEWORK_MARKERS: &[(Framework, &[&str])] = &[
    (Framework::NextJs, &["/_next/", "__next_data__", "id=\"__next\""]),
    (Framework::Gatsby, &["___gatsby", "gatsby-plugin", "/page-data/"]),
    (
        Framework::WordPress,
        &["/wp-content/", "/wp-includes/", "wp-json", "wordpress"],
    ),
    (Framework::Webflow, &["webflow"]),
    (Framework::Squarespace, &["squarespace"]),
    (Framework::Wix, &["wixstatic.com", "parastorage.com", "wix.com"]),
    (Framework::React, &["data-reactroot", "react-dom", "react"]),
    (Framework::Vue, &["data-v-", "v-cloak", "vue.js", "vue"]),
    (Framework::Angular, &["ng-version", "ng-app", "<app-root", "angular"]),
];

/// First framework whose marker appears in `lower` (lowercased HTML).
pub fn detect_framework(lower: &str) -> Framework {
    FRAMEWORK_MARKERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|marker| lower.contains(marker)))
        .map(|(framework, _)| *framework)
        .unwrap_or_default()
}
