//! Per-tool output records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use strum_macros::EnumIter;

use super::Tool;
use crate::analysis::{Assessment, Framework, Signal, Tier};
use crate::fetch::FetchResult;
use crate::utils::sanitize::sanitize_and_truncate_error_message;

/// A listing field the extractors can populate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Description,
    Features,
    Pricing,
    UseCases,
    TargetUsers,
    Platforms,
    CompanyInfo,
    UserStats,
    TechnicalSpecs,
    SocialLinks,
}

impl FieldName {
    /// Heading used in the Markdown report.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Description => "Description",
            FieldName::Features => "Features",
            FieldName::Pricing => "Pricing",
            FieldName::UseCases => "Use cases",
            FieldName::TargetUsers => "Target users",
            FieldName::Platforms => "Platforms",
            FieldName::CompanyInfo => "Company",
            FieldName::UserStats => "User stats",
            FieldName::TechnicalSpecs => "Technical specs",
            FieldName::SocialLinks => "Social links",
        }
    }
}

/// An extracted field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

impl FieldValue {
    /// Single-line rendering for logs and the Markdown report.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::List(items) => items.join(", "),
            FieldValue::Map(map) => map
                .iter()
                .map(|(key, value)| format!("{key}: {value}"))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Final structured output for one tool.
///
/// A field appears in `fields` only when its extractor found a real value.
/// A record with `tier == Tier::Unreachable` has no fields and
/// `extraction_success == false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    pub tool_id: String,
    pub name: String,
    pub source_url: String,
    pub tier: Tier,
    pub fields: BTreeMap<FieldName, FieldValue>,
    pub collected_at: DateTime<Utc>,
    pub extraction_success: bool,
    pub error_detail: Option<String>,
    pub latency_ms: Option<u64>,
    pub status_code: Option<u16>,
    pub confidence: f32,
    pub framework: Option<Framework>,
    #[serde(default)]
    pub signals: BTreeSet<Signal>,
}

impl ToolRecord {
    /// Tier-0 record for a tool that could not be collected.
    ///
    /// `fetch` carries the latency and status of the failed attempt when a
    /// request was actually made.
    pub fn failure(
        tool: &Tool,
        source_url: &str,
        detail: &str,
        fetch: Option<&FetchResult>,
    ) -> Self {
        Self {
            tool_id: tool.id.clone(),
            name: tool.name.clone(),
            source_url: source_url.to_string(),
            tier: Tier::Unreachable,
            fields: BTreeMap::new(),
            collected_at: Utc::now(),
            extraction_success: false,
            error_detail: Some(sanitize_and_truncate_error_message(detail)),
            latency_ms: fetch.map(|f| f.latency_ms),
            status_code: fetch.and_then(|f| f.status_code),
            confidence: Tier::Unreachable.confidence(),
            framework: None,
            signals: BTreeSet::new(),
        }
    }

    /// Record for a reachable tool.
    pub fn collected(
        tool: &Tool,
        assessment: &Assessment,
        fetch: &FetchResult,
        fields: BTreeMap<FieldName, FieldValue>,
    ) -> Self {
        Self {
            tool_id: tool.id.clone(),
            name: tool.name.clone(),
            source_url: assessment.source_url.clone(),
            tier: assessment.tier,
            fields,
            collected_at: Utc::now(),
            extraction_success: true,
            error_detail: None,
            latency_ms: Some(fetch.latency_ms),
            status_code: fetch.status_code,
            confidence: assessment.confidence,
            framework: Some(assessment.detected_framework),
            signals: assessment.signals.clone(),
        }
    }

    pub fn field(&self, name: FieldName) -> Option<&FieldValue> {
        self.fields.get(&name)
    }
}
