//! Text cleaning and the content filters shared by every free-text extractor.
//!
//! Marketing pages are full of navigation chrome, cookie banners and legal
//! footers, and a naive pattern match picks those up long before it finds a
//! sentence about the product. Every candidate string is therefore cleaned
//! with [`clean_text`] and then checked with [`is_quality_content`] (enhanced
//! profile) or [`is_navigation_text`] (basic profile) before it is accepted.

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::compile_regex_unsafe;

/// Phrases that mark a candidate as boilerplate when the text starts with them.
pub const BOILERPLATE_PHRASES: &[&str] = &[
    "menu",
    "home",
    "about",
    "contact",
    "login",
    "signup",
    "register",
    "sign in",
    "sign up",
    "©",
    "copyright",
    "all rights reserved",
    "cookie",
    "privacy",
    "terms",
    "click here",
    "learn more",
    "read more",
];

/// Whole words that mark a candidate as navigation text (basic profile).
pub const NAVIGATION_WORDS: &[&str] = &[
    "menu", "home", "about", "contact", "login", "signup", "register", "sign in", "sign up",
];

/// Markup and code vocabulary that leaks into feature candidates from inline
/// templates and style blocks.
pub const TECHNICAL_TERMS: &[&str] = &[
    "class", "div", "span", "style", "css", "html", "javascript", "function", "var", "const",
];

/// Minimum number of words a quality candidate must have.
pub const MIN_QUALITY_WORDS: usize = 5;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(r"<[^>]*>", "TAG_RE"));
static AMP_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"&(?:amp;)+", "AMP_RUN_RE"));
static YEAR_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"^\d{4}$", "YEAR_ONLY_RE"));

/// Entities decoded by [`clean_text`], in replacement order.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Upper bound on strip/decode rounds in [`clean_text`].
const MAX_CLEAN_ROUNDS: usize = 16;

/// Strips tags, decodes the common HTML entities and collapses whitespace.
///
/// Decoding can expose new tags (`&lt;b&gt;`) or new entities (`&amp;amp;`),
/// so the strip/decode step repeats until the text stops changing. Any run of
/// nested `&amp;` collapses in a single pass, and the rounds are capped at
/// [`MAX_CLEAN_ROUNDS`], so every call is linear in the input. Below the cap
/// the result is a fixed point: `clean_text(clean_text(s)) == clean_text(s)`.
pub fn clean_text(text: &str) -> String {
    let mut current = text.to_string();
    for _ in 0..MAX_CLEAN_ROUNDS {
        let stripped = TAG_RE.replace_all(&current, "");
        let mut next = AMP_RUN_RE.replace_all(&stripped, "&").into_owned();
        for (entity, replacement) in ENTITIES {
            if next.contains(entity) {
                next = next.replace(entity, replacement);
            }
        }
        if next == current {
            break;
        }
        current = next;
    }
    current.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Renders markup as the words a reader would see, with tag boundaries turned
/// into spaces so adjacent blocks do not run together.
pub fn visible_text(markup: &str) -> String {
    clean_text(&TAG_RE.replace_all(markup, " "))
}

/// Returns `true` when `text` reads like substantive content.
///
/// Rejects text that (after cleaning) starts with one of
/// [`BOILERPLATE_PHRASES`] (case-insensitive), is a bare four-digit year, has
/// fewer than [`MIN_QUALITY_WORDS`] words, or contains no alphabetic
/// character.
pub fn is_quality_content(text: &str) -> bool {
    let cleaned = clean_text(text);
    let lower = cleaned.to_lowercase();

    if BOILERPLATE_PHRASES
        .iter()
        .any(|phrase| lower.starts_with(phrase))
    {
        return false;
    }
    if YEAR_ONLY_RE.is_match(&cleaned) {
        return false;
    }

    cleaned.split_whitespace().count() >= MIN_QUALITY_WORDS
        && cleaned.chars().any(char::is_alphabetic)
}

/// Returns `true` when `text` contains one of [`NAVIGATION_WORDS`] as a whole
/// word (case-insensitive).
pub fn is_navigation_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    NAVIGATION_WORDS.iter().any(|word| contains_word(&lower, word))
}

/// Returns `true` when `text` contains one of [`TECHNICAL_TERMS`] as a whole
/// word (case-insensitive).
pub fn is_technical_term(text: &str) -> bool {
    let lower = text.to_lowercase();
    TECHNICAL_TERMS.iter().any(|term| contains_word(&lower, term))
}

/// Whole-word containment test on already-lowercased text.
///
/// `word` may contain spaces or punctuation; only its two ends are checked for
/// word boundaries.
pub fn contains_word(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    haystack.match_indices(word).any(|(start, matched)| {
        let end = start + matched.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}
