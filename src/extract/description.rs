//! Description extraction.

use super::patterns::CompiledDescription;
use super::text::clean_text;
use super::{Extraction, Extractor, Page};
use crate::config::DESCRIPTION_PLACEHOLDER;

impl Extractor {
    /// Returns the first description candidate, in cascade order, that is at
    /// least `min_chars` characters once cleaned and passes the profile filter.
    ///
    /// When the cascade is exhausted the enhanced profile tries a bare `<h1>`
    /// without the quality filter before giving up with the placeholder.
    pub fn extract_description(&self, page: &Page<'_>, min_chars: usize) -> Extraction<String> {
        let accepts = |candidate: &String| {
            !candidate.is_empty()
                && candidate.chars().count() >= min_chars
                && self.accepts_text(candidate)
        };

        for rule in &self.tables.description {
            let found = match rule {
                CompiledDescription::Meta { selector, .. } => page
                    .document()
                    .select(selector)
                    .filter_map(|element| element.value().attr("content"))
                    .map(clean_text)
                    .find(accepts),
                CompiledDescription::Pattern(pattern) => {
                    pattern.candidates(page).map(clean_text).find(accepts)
                }
            };
            if let Some(description) = found {
                log::trace!("Description matched rule '{}'", rule.name());
                return Extraction::Found(description);
            }
        }

        if let Some(fallback) = &self.tables.description_fallback {
            if let Some(heading) = fallback
                .candidates(page)
                .map(clean_text)
                .find(|candidate| !candidate.is_empty() && candidate.chars().count() >= min_chars)
            {
                log::trace!("Description fell back to rule '{}'", fallback.name);
                return Extraction::Found(heading);
            }
        }

        Extraction::Placeholder(DESCRIPTION_PLACEHOLDER.to_string())
    }
}
