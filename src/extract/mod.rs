//! Field extraction from tool marketing pages.
//!
//! This module turns a fetched page into listing fields:
//! - Description, features and use cases (ordered pattern cascades)
//! - Pricing model (ordered vocabulary rules)
//! - Target users and platforms (keyword tables)
//! - Company info, user stats, technical specs and social links (optional)
//!
//! Free-text extractors never fail: when nothing qualifies they return an
//! [`Extraction::Placeholder`] so callers can tell a real value from a stand-in.
//! Structured extractors return `None` instead.
//!
//! The [`Extractor`] is selected by [`ExtractionProfile`], which picks the
//! pattern tables and the acceptance filter; the driver code is shared.

mod audience;
mod company;
mod description;
mod features;
pub mod keywords;
pub mod patterns;
mod pricing;
mod social;
pub mod text;

use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

use crate::config::ExtractionProfile;
use crate::utils::compile_regex_unsafe;

pub use company::{CompanyInfo, UserStats};
pub use patterns::{tables_for, PatternTables};
pub use pricing::{PricingModel, PricingRule};
pub use text::{clean_text, is_navigation_text, is_quality_content, is_technical_term};

static NON_CONTENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>|<!--.*?-->",
        "NON_CONTENT_RE",
    )
});

/// A fetched page prepared for extraction.
///
/// Holds the raw HTML alongside the renditions the extractors match against,
/// so each is computed once per page rather than once per rule.
pub struct Page<'a> {
    raw: &'a str,
    markup: String,
    lower: String,
    text: String,
    document: Html,
}

impl<'a> Page<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let markup = NON_CONTENT_RE.replace_all(raw, " ").into_owned();
        let lower = markup.to_lowercase();
        let text = text::visible_text(&markup);
        Self {
            raw,
            markup,
            lower,
            text,
            document: Html::parse_document(raw),
        }
    }

    /// The HTML exactly as fetched.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// HTML without scripts, styles and comments.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Lowercased [`markup`](Self::markup).
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Visible text: tags collapsed to spaces, entities decoded.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn document(&self) -> &Html {
        &self.document
    }
}

impl std::fmt::Debug for Page<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("raw_bytes", &self.raw.len())
            .field("text_chars", &self.text.chars().count())
            .finish()
    }
}

/// Outcome of a free-text extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<T> {
    /// A value read from the page.
    Found(T),
    /// Nothing qualified; the value is the generic stand-in.
    Placeholder(T),
}

impl<T> Extraction<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Found(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Extraction::Found(value) | Extraction::Placeholder(value) => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Extraction::Found(value) | Extraction::Placeholder(value) => value,
        }
    }

    /// The value if it was read from the page, `None` for a placeholder.
    pub fn found(self) -> Option<T> {
        match self {
            Extraction::Found(value) => Some(value),
            Extraction::Placeholder(_) => None,
        }
    }
}

/// Runs the extractors with one profile's tables and filter.
#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    profile: ExtractionProfile,
    tables: &'static PatternTables,
}

impl Extractor {
    pub fn new(profile: ExtractionProfile) -> Self {
        Self {
            profile,
            tables: tables_for(profile),
        }
    }

    pub fn profile(&self) -> ExtractionProfile {
        self.profile
    }

    /// Acceptance filter for free-text candidates.
    ///
    /// Enhanced uses the quality filter; basic only rejects navigation text.
    pub(crate) fn accepts_text(&self, text: &str) -> bool {
        match self.profile {
            ExtractionProfile::Enhanced => is_quality_content(text),
            ExtractionProfile::Basic => !is_navigation_text(text),
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractionProfile::default())
    }
}

/// Appends `candidate` unless it is empty or already present.
pub(crate) fn push_unique(values: &mut Vec<String>, candidate: String) -> bool {
    if candidate.is_empty() || values.contains(&candidate) {
        return false;
    }
    values.push(candidate);
    true
}
