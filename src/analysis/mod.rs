//! Page complexity analysis.
//!
//! Classifies a fetched page into a [`Tier`] that decides how deep the
//! extractors dig. Analysis is a pure function of the HTML: it counts links,
//! buttons and class-marked sections, notes which key pages and data the site
//! mentions, fingerprints the framework, and then applies the profile's ordered
//! [`TierRule`]s.

mod framework;
mod signals;
mod tier;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::config::ExtractionProfile;

pub use framework::{detect_framework, Framework, FRAMEWORK_MARKERS};
pub use signals::{scan, PageMetrics, Signal};
pub use tier::{
    select_tier, Complexity, InvalidTier, Tier, TierRule, BASIC_TIER_RULES, ENHANCED_TIER_RULES,
    HIGH_MIN_BYTES, VERY_HIGH_MIN_BYTES,
};

/// Everything derived from one page's HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageAnalysis {
    pub tier: Tier,
    /// Name of the tier rule that fired, `None` when the page fell through to `Low`.
    pub matched_rule: Option<String>,
    pub complexity: Complexity,
    pub signals: BTreeSet<Signal>,
    pub framework: Framework,
    pub confidence: f32,
    pub link_count: usize,
    pub button_count: usize,
    pub content_sections: usize,
    pub html_bytes: usize,
}

/// Analyzes `html` with the default (enhanced) profile.
pub fn analyze(html: &str) -> PageAnalysis {
    analyze_with(html, ExtractionProfile::default())
}

/// Analyzes `html` with the tier rules of `profile`.
///
/// Under the enhanced profile a tier-2 or tier-3 verdict also raises the
/// complexity label to `high` or `very-high`.
pub fn analyze_with(html: &str, profile: ExtractionProfile) -> PageAnalysis {
    let lower = html.to_lowercase();
    let metrics = scan(html, &lower);

    let rules = match profile {
        ExtractionProfile::Enhanced => ENHANCED_TIER_RULES,
        ExtractionProfile::Basic => BASIC_TIER_RULES,
    };
    let (tier, matched_rule) = select_tier(rules, &metrics);

    let complexity = match (profile, tier) {
        (ExtractionProfile::Enhanced, Tier::VeryHigh) => Complexity::VeryHigh,
        (ExtractionProfile::Enhanced, Tier::High) => Complexity::High,
        _ => Complexity::from_link_count(metrics.link_count),
    };

    PageAnalysis {
        tier,
        matched_rule: matched_rule.map(str::to_string),
        complexity,
        framework: detect_framework(&lower),
        confidence: tier.confidence(),
        link_count: metrics.link_count,
        button_count: metrics.button_count,
        content_sections: metrics.content_sections,
        html_bytes: metrics.html_bytes,
        signals: metrics.signals,
    }
}

/// The analyzer's verdict for one tool.
///
/// `tier` is [`Tier::Unreachable`] exactly when `reachable` is false, in
/// which case there is no page analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub tool_id: String,
    pub source_url: String,
    pub reachable: bool,
    pub tier: Tier,
    pub signals: BTreeSet<Signal>,
    pub detected_framework: Framework,
    pub confidence: f32,
    pub analysis: Option<PageAnalysis>,
}

impl Assessment {
    pub fn unreachable(tool_id: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            tool_id: tool_id.into(),
            source_url: source_url.into(),
            reachable: false,
            tier: Tier::Unreachable,
            signals: BTreeSet::new(),
            detected_framework: Framework::Unknown,
            confidence: Tier::Unreachable.confidence(),
            analysis: None,
        }
    }

    pub fn reachable(
        tool_id: impl Into<String>,
        source_url: impl Into<String>,
        analysis: PageAnalysis,
    ) -> Self {
        Self {
            tool_id: tool_id.into(),
            source_url: source_url.into(),
            reachable: true,
            tier: analysis.tier,
            signals: analysis.signals.clone(),
            detected_framework: analysis.framework,
            confidence: analysis.confidence,
            analysis: Some(analysis),
        }
    }
}
