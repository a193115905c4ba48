//! Social media link extraction.
//!
//! Anchors are matched against known profile URL shapes; the first URL seen
//! for each platform is kept.

use regex::Regex;
use scraper::Selector;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::{Extractor, Page};
use crate::utils::{compile_regex_unsafe, parse_selector_unsafe};

const ANCHOR_SELECTOR_STR: &str = "a[href]";

/// Platform key and the profile URL shape it is recognized by.
const SOCIAL_PLATFORMS: &[(&str, &str)] = &[
    ("twitter", r"^(?:https?:)?//(?:www\.)?(?:twitter\.com|x\.com)/([^/?#\s]+)"),
    (
        "linkedin",
        r"^(?:https?:)?//(?:[a-z]{2,3}\.|www\.)?linkedin\.com/(?:company|in|school|showcase)/([^/?#\s]+)",
    ),
    ("facebook", r"^(?:https?:)?//(?:www\.|m\.)?facebook\.com/([^/?#\s]+)"),
    ("instagram", r"^(?:https?:)?//(?:www\.)?instagram\.com/([^/?#\s]+)"),
    (
        "youtube",
        r"^(?:https?:)?//(?:www\.)?youtube\.com/(?:channel/|c/|user/|@)([^/?#\s]+)",
    ),
    ("github", r"^(?:https?:)?//(?:www\.)?github\.com/([^/?#\s]+)"),
    ("tiktok", r"^(?:https?:)?//(?:www\.)?tiktok\.com/@([^/?#\s]+)"),
    ("pinterest", r"^(?:https?:)?//(?:[a-z]{2}\.|www\.)?pinterest\.(?:com|co\.uk)/([^/?#\s]+)"),
    ("discord", r"^(?:https?:)?//(?:www\.)?(?:discord\.gg|discord\.com/invite)/([^/?#\s]+)"),
];

/// First path segments that are share or app pages rather than profiles.
const NON_PROFILE_SEGMENTS: &[(&str, &[&str])] = &[
    ("twitter", &["intent", "share", "home", "search", "hashtag"]),
    ("facebook", &["sharer", "sharer.php", "share.php", "dialog"]),
    ("instagram", &["p", "explore"]),
    ("pinterest", &["pin"]),
];

static SOCIAL_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    SOCIAL_PLATFORMS
        .iter()
        .map(|(platform, pattern)| {
            (
                *platform,
                compile_regex_unsafe(&format!("(?i){pattern}"), platform),
            )
        })
        .collect()
});

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));

/// Scheme-relative links (`//twitter.com/...`) are upgraded to https.
fn absolute_url(href: &str) -> String {
    if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    }
}

fn is_profile_segment(platform: &str, segment: &str) -> bool {
    !NON_PROFILE_SEGMENTS
        .iter()
        .filter(|(name, _)| *name == platform)
        .flat_map(|(_, segments)| segments.iter())
        .any(|reserved| reserved.eq_ignore_ascii_case(segment))
}

impl Extractor {
    /// Platform → profile URL for every recognized social link.
    pub fn extract_social_links(&self, page: &Page<'_>) -> Option<BTreeMap<String, String>> {
        let mut links = BTreeMap::new();

        for element in page.document().select(&ANCHOR_SELECTOR) {
            let Some(href) = element.value().attr("href").map(str::trim) else {
                continue;
            };
            let Some((platform, segment)) = SOCIAL_RES.iter().find_map(|(platform, re)| {
                re.captures(href)
                    .and_then(|caps| caps.get(1))
                    .map(|segment| (*platform, segment.as_str()))
            }) else {
                continue;
            };
            if is_profile_segment(platform, segment) {
                links
                    .entry(platform.to_string())
                    .or_insert_with(|| absolute_url(href));
            }
        }

        if links.is_empty() {
            None
        } else {
            Some(links)
        }
    }
}
