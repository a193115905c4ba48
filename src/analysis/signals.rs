//! Structural signals read from raw HTML.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;
use strum_macros::EnumIter;

use crate::extract::text::contains_word;
use crate::utils::compile_regex_unsafe;

/// A structural feature of a page, serialized as a kebab-case tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Signal {
    // Class-marked sections
    HeroSection,
    FeaturesSection,
    PricingSection,
    AboutSection,
    TestimonialsSection,
    // Key pages the site mentions
    PricingPage,
    FeaturesPage,
    AboutPage,
    ContactPage,
    DocsPage,
    // Data the page appears to carry
    PricingData,
    UserStats,
    Technical,
    Mobile,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::HeroSection => "hero-section",
            Signal::FeaturesSection => "features-section",
            Signal::PricingSection => "pricing-section",
            Signal::AboutSection => "about-section",
            Signal::TestimonialsSection => "testimonials-section",
            Signal::PricingPage => "pricing-page",
            Signal::FeaturesPage => "features-page",
            Signal::AboutPage => "about-page",
            Signal::ContactPage => "contact-page",
            Signal::DocsPage => "docs-page",
            Signal::PricingData => "pricing-data",
            Signal::UserStats => "user-stats",
            Signal::Technical => "technical",
            Signal::Mobile => "mobile",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Class fragment marking each section signal.
const SECTION_CLASSES: &[(Signal, &str)] = &[
    (Signal::HeroSection, "hero"),
    (Signal::FeaturesSection, "feature"),
    (Signal::PricingSection, "pricing"),
    (Signal::AboutSection, "about"),
    (Signal::TestimonialsSection, "testimonial"),
];

/// Words whose presence marks each key-page or data signal.
const MENTION_SIGNALS: &[(Signal, &[&str])] = &[
    (Signal::PricingPage, &["pricing", "price", "prices"]),
    (Signal::FeaturesPage, &["feature", "features"]),
    (Signal::AboutPage, &["about", "company"]),
    (Signal::ContactPage, &["contact", "support"]),
    (Signal::DocsPage, &["docs", "documentation"]),
    (Signal::PricingData, &["$", "price", "prices", "subscription"]),
    (Signal::UserStats, &["user", "users", "customer", "customers"]),
    (Signal::Technical, &["api", "integration", "integrations"]),
    (Signal::Mobile, &["download", "app store", "play store"]),
];

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?i)<a\s[^>]*href", "LINK_RE"));
static BUTTON_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?i)<button\b", "BUTTON_RE"));
static CONTENT_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r#"(?i)<(?:section|div)\b[^>]*class=["'][^"']*(?:hero|feature|pricing|about|testimonial|content)[^"']*["'][^>]*>"#,
        "CONTENT_SECTION_RE",
    )
});
static GROUPED_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"\d+,\d+", "GROUPED_NUMBER_RE"));
static SECTION_RES: LazyLock<Vec<(Signal, Regex)>> = LazyLock::new(|| {
    SECTION_CLASSES
        .iter()
        .map(|(signal, class)| {
            let pattern = format!(
                r#"(?i)<(?:section|div)\b[^>]*class=["'][^"']*{class}[^"']*["']"#
            );
            (*signal, compile_regex_unsafe(&pattern, signal.as_str()))
        })
        .collect()
});

/// Raw counts and signals for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetrics {
    pub link_count: usize,
    pub button_count: usize,
    pub content_sections: usize,
    pub html_bytes: usize,
    pub signals: BTreeSet<Signal>,
}

impl PageMetrics {
    pub fn has(&self, signal: Signal) -> bool {
        self.signals.contains(&signal)
    }
}

fn mentions(lower: &str, term: &str) -> bool {
    if term.chars().any(char::is_alphanumeric) {
        contains_word(lower, term)
    } else {
        lower.contains(term)
    }
}

/// Measures `html`; `lower` must be its lowercased copy.
pub fn scan(html: &str, lower: &str) -> PageMetrics {
    let mut signals: BTreeSet<Signal> = SECTION_RES
        .iter()
        .filter(|(_, re)| re.is_match(html))
        .map(|(signal, _)| *signal)
        .collect();

    signals.extend(
        MENTION_SIGNALS
            .iter()
            .filter(|(_, terms)| terms.iter().any(|term| mentions(lower, term)))
            .map(|(signal, _)| *signal),
    );
    if GROUPED_NUMBER_RE.is_match(html) {
        signals.insert(Signal::UserStats);
    }

    PageMetrics {
        link_count: LINK_RE.find_iter(html).count(),
        button_count: BUTTON_RE.find_iter(html).count(),
        content_sections: CONTENT_SECTION_RE.find_iter(html).count(),
        html_bytes: html.len(),
        signals,
    }
}
