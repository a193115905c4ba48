//! Tiers and the ordered rules that assign them.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;
use thiserror::Error;

use super::signals::{PageMetrics, Signal};

/// How much information a page is expected to yield.
///
/// Serialized as its integer level. `Unreachable` is only ever assigned by the
/// orchestrator when a page could not be fetched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Tier {
    Unreachable = 0,
    Low = 1,
    High = 2,
    VeryHigh = 3,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("tier level must be between 0 and 3, got {0}")]
pub struct InvalidTier(pub u8);

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier as u8
    }
}

impl TryFrom<u8> for Tier {
    type Error = InvalidTier;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Tier::Unreachable),
            1 => Ok(Tier::Low),
            2 => Ok(Tier::High),
            3 => Ok(Tier::VeryHigh),
            other => Err(InvalidTier(other)),
        }
    }
}

impl Tier {
    pub fn level(self) -> u8 {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Unreachable => "unreachable",
            Tier::Low => "low",
            Tier::High => "high",
            Tier::VeryHigh => "very-high",
        }
    }

    /// Fixed confidence reported with the tier. These are uncalibrated.
    pub fn confidence(self) -> f32 {
        match self {
            Tier::VeryHigh => 0.9,
            Tier::High => 0.7,
            Tier::Low => 0.8,
            Tier::Unreachable => 0.0,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// Coarse page complexity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Complexity {
    /// Link-count bands: up to 10 is low, up to 20 medium, beyond that high.
    pub fn from_link_count(links: usize) -> Self {
        match links {
            0..=10 => Complexity::Low,
            11..=20 => Complexity::Medium,
            _ => Complexity::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
            Complexity::VeryHigh => "very-high",
        }
    }
}

pub const VERY_HIGH_MIN_BYTES: usize = 20_000;
pub const HIGH_MIN_BYTES: usize = 10_000;
/// Basic profile: strictly more links than this for tier 3.
pub const BASIC_VERY_HIGH_LINKS_ABOVE: usize = 5;
/// Basic profile: at least this many links for tier 2.
pub const BASIC_HIGH_MIN_LINKS: usize = 3;

/// Assigns `tier` when `applies` holds. Rules are tried in order and the
/// first match wins; a page matching none is [`Tier::Low`].
#[derive(Debug, Clone, Copy)]
pub struct TierRule {
    pub name: &'static str,
    pub tier: Tier,
    pub applies: fn(&PageMetrics) -> bool,
}

fn hero_with_offer(metrics: &PageMetrics) -> bool {
    metrics.has(Signal::HeroSection)
        && (metrics.has(Signal::FeaturesSection) || metrics.has(Signal::PricingSection))
        && metrics.html_bytes > VERY_HIGH_MIN_BYTES
}

fn hero_with_body(metrics: &PageMetrics) -> bool {
    metrics.has(Signal::HeroSection) && metrics.html_bytes > HIGH_MIN_BYTES
}

fn linked_key_pages(metrics: &PageMetrics) -> bool {
    metrics.link_count > BASIC_VERY_HIGH_LINKS_ABOVE
        && (metrics.has(Signal::PricingPage)
            || metrics.has(Signal::FeaturesPage)
            || metrics.has(Signal::AboutPage))
}

fn linked_body(metrics: &PageMetrics) -> bool {
    metrics.link_count >= BASIC_HIGH_MIN_LINKS && metrics.html_bytes > HIGH_MIN_BYTES
}

pub const ENHANCED_TIER_RULES: &[TierRule] = &[
    TierRule {
        name: "hero-with-offer",
        tier: Tier::VeryHigh,
        applies: hero_with_offer,
    },
    TierRule {
        name: "hero-with-body",
        tier: Tier::High,
        applies: hero_with_body,
    },
];

pub const BASIC_TIER_RULES: &[TierRule] = &[
    TierRule {
        name: "linked-key-pages",
        tier: Tier::VeryHigh,
        applies: linked_key_pages,
    },
    TierRule {
        name: "linked-body",
        tier: Tier::High,
        applies: linked_body,
    },
];

/// First matching rule's tier, or `Low`. Never returns `Unreachable`.
pub fn select_tier(rules: &[TierRule], metrics: &PageMetrics) -> (Tier, Option<&'static str>) {
    rules
        .iter()
        .find(|rule| (rule.applies)(metrics))
        .map(|rule| (rule.tier, Some(rule.name)))
        .unwrap_or((Tier::Low, None))
}
