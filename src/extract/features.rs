//! Feature list extraction.

use super::text::{clean_text, is_technical_term};
use super::{push_unique, Extraction, Extractor, Page};
use crate::config::{ExtractionProfile, FEATURES_PLACEHOLDER};

impl Extractor {
    /// Collects up to `max` distinct features.
    ///
    /// Pattern rules are walked in order, each over all of its matches, until
    /// the list is full. A short list is topped up from the feature keyword
    /// table, whose labels count against the same cap.
    pub fn extract_features(&self, page: &Page<'_>, max: usize) -> Extraction<Vec<String>> {
        let mut features: Vec<String> = Vec::new();

        'rules: for rule in &self.tables.features {
            for candidate in rule.candidates(page) {
                if features.len() >= max {
                    break 'rules;
                }
                let feature = clean_text(candidate);
                if self.accepts_feature(&feature) && push_unique(&mut features, feature) {
                    log::trace!("Feature matched rule '{}'", rule.name);
                }
            }
        }

        for rule in &self.tables.feature_keywords {
            if features.len() >= max {
                break;
            }
            if rule.is_match(page) {
                push_unique(&mut features, rule.name.to_string());
            }
        }

        if features.is_empty() {
            Extraction::Placeholder(vec![FEATURES_PLACEHOLDER.to_string()])
        } else {
            Extraction::Found(features)
        }
    }

    fn accepts_feature(&self, feature: &str) -> bool {
        match self.profile {
            ExtractionProfile::Enhanced => {
                self.accepts_text(feature) && !is_technical_term(feature)
            }
            ExtractionProfile::Basic => self.accepts_text(feature),
        }
    }
}
