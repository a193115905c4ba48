//! How much to extract for each tier.

use std::collections::BTreeMap;

use log::trace;

use super::record::{FieldName, FieldValue};
use crate::analysis::Tier;
use crate::error_handling::{ProcessingStats, WarningType};
use crate::extract::{Extraction, Extractor, Page};

/// Extraction settings selected from a page's tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionDepth {
    pub max_features: usize,
    pub min_description_chars: usize,
    pub max_use_cases: usize,
    /// Tier-1 pages only get the free/paid pricing split.
    pub basic_pricing: bool,
    pub fields: &'static [FieldName],
}

const CORE_FIELDS: &[FieldName] = &[
    FieldName::Description,
    FieldName::Features,
    FieldName::Pricing,
    FieldName::UseCases,
    FieldName::TargetUsers,
    FieldName::Platforms,
];

const ALL_FIELDS: &[FieldName] = &[
    FieldName::Description,
    FieldName::Features,
    FieldName::Pricing,
    FieldName::UseCases,
    FieldName::TargetUsers,
    FieldName::Platforms,
    FieldName::CompanyInfo,
    FieldName::UserStats,
    FieldName::TechnicalSpecs,
    FieldName::SocialLinks,
];

const MINIMAL_FIELDS: &[FieldName] = &[
    FieldName::Description,
    FieldName::Features,
    FieldName::Pricing,
];

impl ExtractionDepth {
    /// Depth for `tier`; `None` for unreachable pages.
    pub fn for_tier(tier: Tier) -> Option<Self> {
        match tier {
            Tier::Unreachable => None,
            Tier::Low => Some(Self {
                max_features: 3,
                min_description_chars: 20,
                max_use_cases: 0,
                basic_pricing: true,
                fields: MINIMAL_FIELDS,
            }),
            Tier::High => Some(Self {
                max_features: 5,
                min_description_chars: 40,
                max_use_cases: 2,
                basic_pricing: false,
                fields: CORE_FIELDS,
            }),
            Tier::VeryHigh => Some(Self {
                max_features: 8,
                min_description_chars: 80,
                max_use_cases: 3,
                basic_pricing: false,
                fields: ALL_FIELDS,
            }),
        }
    }

    pub fn includes(&self, field: FieldName) -> bool {
        self.fields.contains(&field)
    }
}

/// Keeps found values; placeholders are counted and dropped.
fn found<T>(
    extraction: Extraction<T>,
    warning: Option<WarningType>,
    stats: &ProcessingStats,
) -> Option<T> {
    if !extraction.is_found() {
        if let Some(warning) = warning {
            stats.increment_warning(warning);
        }
    }
    extraction.found()
}

/// Runs the extractors `depth` asks for and keeps the fields that found a
/// real value.
pub fn extract_fields(
    extractor: &Extractor,
    page: &Page<'_>,
    depth: &ExtractionDepth,
    stats: &ProcessingStats,
) -> BTreeMap<FieldName, FieldValue> {
    let mut fields = BTreeMap::new();

    for &field in depth.fields {
        let value = match field {
            FieldName::Description => found(
                extractor.extract_description(page, depth.min_description_chars),
                Some(WarningType::PlaceholderDescription),
                stats,
            )
            .map(FieldValue::Text),
            FieldName::Features => found(
                extractor.extract_features(page, depth.max_features),
                Some(WarningType::PlaceholderFeatures),
                stats,
            )
            .map(FieldValue::List),
            FieldName::Pricing => {
                let pricing = if depth.basic_pricing {
                    extractor.extract_basic_pricing(page)
                } else {
                    extractor.extract_pricing_info(page)
                };
                found(pricing, Some(WarningType::PlaceholderPricing), stats).map(|model| {
                    FieldValue::Map(BTreeMap::from([
                        ("category".to_string(), model.category().to_string()),
                        ("summary".to_string(), model.summary().to_string()),
                    ]))
                })
            }
            FieldName::UseCases => found(
                extractor.extract_use_cases(page, depth.max_use_cases),
                None,
                stats,
            )
            .map(FieldValue::List),
            FieldName::TargetUsers => {
                found(extractor.extract_target_users(page), None, stats).map(FieldValue::List)
            }
            FieldName::Platforms => {
                found(extractor.extract_platforms(page), None, stats).map(FieldValue::List)
            }
            FieldName::CompanyInfo => extractor
                .extract_company_info(page)
                .map(|info| FieldValue::Map(info.into_map())),
            FieldName::UserStats => extractor
                .extract_user_stats(page)
                .map(|user_stats| FieldValue::Map(user_stats.into_map())),
            FieldName::TechnicalSpecs => extractor
                .extract_technical_specs(page)
                .map(FieldValue::List),
            FieldName::SocialLinks => extractor.extract_social_links(page).map(FieldValue::Map),
        };

        match value {
            Some(value) => {
                fields.insert(field, value);
            }
            None => trace!("No value for {field:?}"),
        }
    }

    fields
}
