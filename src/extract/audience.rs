//! Use cases, target users and platforms.

use super::keywords::matched_labels;
use super::text::clean_text;
use super::{push_unique, Extraction, Extractor, Page};
use crate::config::{PLATFORM_PLACEHOLDER, TARGET_USERS_PLACEHOLDER, USE_CASE_PLACEHOLDER};

impl Extractor {
    /// Up to `max` use cases: phrase matches first, then keyword labels.
    pub fn extract_use_cases(&self, page: &Page<'_>, max: usize) -> Extraction<Vec<String>> {
        let mut use_cases: Vec<String> = Vec::new();

        'rules: for rule in &self.tables.use_case_phrases {
            for candidate in rule.candidates(page) {
                if use_cases.len() >= max {
                    break 'rules;
                }
                let use_case = clean_text(candidate);
                if self.accepts_text(&use_case) {
                    push_unique(&mut use_cases, use_case);
                }
            }
        }

        for rule in &self.tables.use_case_keywords {
            if use_cases.len() >= max {
                break;
            }
            if rule.is_match(page.text()) {
                push_unique(&mut use_cases, rule.label.to_string());
            }
        }

        or_placeholder(use_cases, USE_CASE_PLACEHOLDER)
    }

    /// Every audience label whose keywords appear in the visible text.
    pub fn extract_target_users(&self, page: &Page<'_>) -> Extraction<Vec<String>> {
        or_placeholder(
            matched_labels(&self.tables.target_users, page.text()),
            TARGET_USERS_PLACEHOLDER,
        )
    }

    /// Every platform whose indicators appear in the visible text.
    pub fn extract_platforms(&self, page: &Page<'_>) -> Extraction<Vec<String>> {
        or_placeholder(
            matched_labels(&self.tables.platforms, page.text()),
            PLATFORM_PLACEHOLDER,
        )
    }
}

fn or_placeholder(values: Vec<String>, placeholder: &str) -> Extraction<Vec<String>> {
    if values.is_empty() {
        Extraction::Placeholder(vec![placeholder.to_string()])
    } else {
        Extraction::Found(values)
    }
}
