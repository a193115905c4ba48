//! Company info, user statistics and technical specs.
//!
//! These extractors report only what the page states. When nothing is found
//! they return `None` and the field is left out of the record.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::keywords::matched_labels;
use super::patterns::CompiledRule;
use super::text::{clean_text, is_navigation_text};
use super::{Extractor, Page};
use crate::config::MIN_FOUNDED_YEAR;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: Option<String>,
    pub founded: Option<i32>,
    pub headquarters: Option<String>,
}

impl CompanyInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.founded.is_none() && self.headquarters.is_none()
    }

    /// Flattens the known parts into a string map for the record.
    pub fn into_map(self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        if let Some(name) = self.name {
            map.insert("name".to_string(), name);
        }
        if let Some(founded) = self.founded {
            map.insert("founded".to_string(), founded.to_string());
        }
        if let Some(headquarters) = self.headquarters {
            map.insert("headquarters".to_string(), headquarters);
        }
        map
    }
}

/// Counts as printed on the page, e.g. `"10,000+"` or `"50k"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub users: Option<String>,
    pub projects: Option<String>,
    pub countries: Option<String>,
}

impl UserStats {
    pub fn is_empty(&self) -> bool {
        self.users.is_none() && self.projects.is_none() && self.countries.is_none()
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        [
            ("users", self.users),
            ("projects", self.projects),
            ("countries", self.countries),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect()
    }
}

/// First candidate across `rules`, in order, that `accept` keeps.
fn first_candidate(
    rules: &[CompiledRule],
    page: &Page<'_>,
    accept: impl Fn(&str) -> bool,
) -> Option<String> {
    rules.iter().find_map(|rule| {
        rule.candidates(page)
            .map(clean_text)
            .find(|candidate| !candidate.is_empty() && accept(candidate.as_str()))
    })
}

/// Parses a founding year, accepting only `MIN_FOUNDED_YEAR..=current_year`.
pub(crate) fn parse_founded_year(candidate: &str, current_year: i32) -> Option<i32> {
    candidate
        .parse::<i32>()
        .ok()
        .filter(|year| (MIN_FOUNDED_YEAR..=current_year).contains(year))
}

impl Extractor {
    /// Company name, founding year and headquarters, if the page states any.
    pub fn extract_company_info(&self, page: &Page<'_>) -> Option<CompanyInfo> {
        let current_year = chrono::Utc::now().year();
        let info = CompanyInfo {
            name: first_candidate(&self.tables.company_name, page, |name| {
                !is_navigation_text(name)
            }),
            founded: self
                .tables
                .founded
                .iter()
                .flat_map(|rule| rule.candidates(page))
                .find_map(|year| parse_founded_year(year, current_year)),
            headquarters: first_candidate(&self.tables.headquarters, page, |location| {
                location.chars().any(char::is_uppercase)
            }),
        };

        if info.is_empty() {
            None
        } else {
            Some(info)
        }
    }

    /// User, project and country counts, if the page states any.
    pub fn extract_user_stats(&self, page: &Page<'_>) -> Option<UserStats> {
        let stats = UserStats {
            users: first_candidate(&self.tables.users, page, |_| true),
            projects: first_candidate(&self.tables.projects, page, |_| true),
            countries: first_candidate(&self.tables.countries, page, |_| true),
        };

        if stats.is_empty() {
            None
        } else {
            Some(stats)
        }
    }

    /// Capabilities such as API availability and mobile support.
    pub fn extract_technical_specs(&self, page: &Page<'_>) -> Option<Vec<String>> {
        let specs = matched_labels(&self.tables.technical_specs, page.text());
        if specs.is_empty() {
            None
        } else {
            Some(specs)
        }
    }
}
