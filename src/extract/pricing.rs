//! Pricing model classification.
//!
//! Pricing is inferred from vocabulary alone: an ordered list of
//! [`PricingRule`]s is tested against the lowercased markup and the first rule
//! whose conditions hold decides the model.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use super::text::contains_word;
use super::{Extraction, Extractor, Page};

/// Pricing model reported for a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum PricingModel {
    FreeTrial,
    Freemium,
    Subscription,
    OneTime,
    ContactForQuote,
    Free,
    Enterprise,
    PricingPage,
    Paid,
    Unknown,
}

impl PricingModel {
    /// Stable machine-readable category, e.g. `"one-time"`.
    pub fn category(&self) -> &'static str {
        match self {
            PricingModel::FreeTrial => "free-trial",
            PricingModel::Freemium => "freemium",
            PricingModel::Subscription => "subscription",
            PricingModel::OneTime => "one-time",
            PricingModel::ContactForQuote => "contact-for-quote",
            PricingModel::Free => "free",
            PricingModel::Enterprise => "enterprise",
            PricingModel::PricingPage => "pricing-page",
            PricingModel::Paid => "paid",
            PricingModel::Unknown => "unknown",
        }
    }

    /// One-line summary shown in the listing.
    pub fn summary(&self) -> &'static str {
        match self {
            PricingModel::FreeTrial => "Free trial available",
            PricingModel::Freemium => "Free and paid plans",
            PricingModel::Subscription => "Subscription pricing",
            PricingModel::OneTime => "One-time purchase",
            PricingModel::ContactForQuote => "Contact sales for a quote",
            PricingModel::Free => "Free to use",
            PricingModel::Enterprise => "Enterprise pricing",
            PricingModel::PricingPage => "Multiple pricing plans",
            PricingModel::Paid => "Paid plans",
            PricingModel::Unknown => "See the official website for pricing",
        }
    }
}

/// Classifies a page as `model` when every group in `all_of` has at least one
/// mentioned term and no term in `none_of` is mentioned.
#[derive(Debug, Clone, Copy)]
pub struct PricingRule {
    pub model: PricingModel,
    pub all_of: &'static [&'static [&'static str]],
    pub none_of: &'static [&'static str],
}

impl PricingRule {
    fn applies(&self, lower: &str) -> bool {
        self.all_of
            .iter()
            .all(|group| group.iter().any(|term| mentions(lower, term)))
            && !self.none_of.iter().any(|term| mentions(lower, term))
    }
}

pub const ENHANCED_PRICING_RULES: &[PricingRule] = &[
    PricingRule {
        model: PricingModel::FreeTrial,
        all_of: &[&["free"], &["trial"]],
        none_of: &[],
    },
    PricingRule {
        model: PricingModel::Freemium,
        all_of: &[&["free"], &["premium", "pro"]],
        none_of: &[],
    },
    PricingRule {
        model: PricingModel::Subscription,
        all_of: &[&["subscription", "monthly", "annual", "per month"]],
        none_of: &[],
    },
    PricingRule {
        model: PricingModel::OneTime,
        all_of: &[&["one-time", "one time", "onetime", "lifetime"]],
        none_of: &[],
    },
    PricingRule {
        model: PricingModel::ContactForQuote,
        all_of: &[&["contact"], &["pricing"]],
        none_of: &[],
    },
    PricingRule {
        model: PricingModel::Free,
        all_of: &[&["free"]],
        none_of: &["paid", "premium"],
    },
    PricingRule {
        model: PricingModel::Enterprise,
        all_of: &[&["enterprise", "business"]],
        none_of: &[],
    },
    PricingRule {
        model: PricingModel::PricingPage,
        all_of: &[&["pricing", "price", "$"]],
        none_of: &[],
    },
];

pub const BASIC_PRICING_RULES: &[PricingRule] = &[
    PricingRule {
        model: PricingModel::Freemium,
        all_of: &[&["free"], &["premium"]],
        none_of: &[],
    },
    PricingRule {
        model: PricingModel::Subscription,
        all_of: &[&["subscription", "monthly"]],
        none_of: &[],
    },
    PricingRule {
        model: PricingModel::Free,
        all_of: &[&["free"]],
        none_of: &["paid"],
    },
    PricingRule {
        model: PricingModel::PricingPage,
        all_of: &[&["pricing", "$"]],
        none_of: &[],
    },
];

/// Coarse free/paid split used at the lowest depth, whatever the profile.
pub const TIER_ONE_PRICING_RULES: &[PricingRule] = &[
    PricingRule {
        model: PricingModel::Free,
        all_of: &[&["free"]],
        none_of: &[],
    },
    PricingRule {
        model: PricingModel::Paid,
        all_of: &[&["pricing", "$"]],
        none_of: &[],
    },
];

/// Whole-word mention, except for symbol terms like `$` which match anywhere.
fn mentions(lower: &str, term: &str) -> bool {
    if term.chars().any(char::is_alphanumeric) {
        contains_word(lower, term)
    } else {
        lower.contains(term)
    }
}

fn classify(rules: &[PricingRule], lower: &str) -> Extraction<PricingModel> {
    rules
        .iter()
        .find(|rule| rule.applies(lower))
        .map(|rule| Extraction::Found(rule.model))
        .unwrap_or(Extraction::Placeholder(PricingModel::Unknown))
}

impl Extractor {
    /// Classifies the pricing model with the profile's full rule list.
    pub fn extract_pricing_info(&self, page: &Page<'_>) -> Extraction<PricingModel> {
        classify(self.tables.pricing, page.lower())
    }

    /// Free/paid classification used for low-tier pages.
    pub fn extract_basic_pricing(&self, page: &Page<'_>) -> Extraction<PricingModel> {
        classify(TIER_ONE_PRICING_RULES, page.lower())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_matches_serde_name() {
        for model in PricingModel::iter() {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{}\"", model.category()));
            assert!(!model.summary().is_empty());
        }
    }

    #[test]
    fn test_enhanced_rule_order() {
        let cases = [
            ("start your free trial today", PricingModel::FreeTrial),
            ("free plan and pro plan", PricingModel::Freemium),
            ("billed annual or monthly", PricingModel::Subscription),
            ("lifetime deal", PricingModel::OneTime),
            ("contact us for pricing", PricingModel::ContactForQuote),
            ("completely free forever", PricingModel::Free),
            ("built for business", PricingModel::Enterprise),
            ("only $5", PricingModel::PricingPage),
        ];
        for (text, expected) in cases {
            assert_eq!(
                classify(ENHANCED_PRICING_RULES, text),
                Extraction::Found(expected),
                "{text}"
            );
        }
    }

    #[test]
    fn test_free_excluded_when_paid_mentioned() {
        assert_eq!(
            classify(ENHANCED_PRICING_RULES, "free viewer, paid exports"),
            Extraction::Placeholder(PricingModel::Unknown)
        );
    }

    #[test]
    fn test_whole_word_terms() {
        // "product" must not count as "pro", "freedom" not as "free"
        assert_eq!(
            classify(ENHANCED_PRICING_RULES, "product freedom"),
            Extraction::Placeholder(PricingModel::Unknown)
        );
    }

    #[test]
    fn test_tier_one_rules() {
        assert_eq!(
            classify(TIER_ONE_PRICING_RULES, "free forever"),
            Extraction::Found(PricingModel::Free)
        );
        assert_eq!(
            classify(TIER_ONE_PRICING_RULES, "plans from $9"),
            Extraction::Found(PricingModel::Paid)
        );
        assert_eq!(
            classify(TIER_ONE_PRICING_RULES, "nothing to see"),
            Extraction::Placeholder(PricingModel::Unknown)
        );
    }

    #[test]
    fn test_basic_rules_skip_trial() {
        assert_eq!(
            classify(BASIC_PRICING_RULES, "free trial"),
            Extraction::Found(PricingModel::Free)
        );
    }
}
