//! Keyword tables mapping page vocabulary to listing labels.
//!
//! Each table is plain data: a [`KeywordRule`] names the label that is emitted
//! and the words that trigger it. Words match at a word start and ignore case,
//! so `architect` also matches "Architects" and "architecture".

use regex::Regex;

use crate::utils::compile_regex_unsafe;

/// A label emitted when the page mentions any of `any_of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub label: &'static str,
    pub any_of: &'static [&'static str],
}

pub const ENHANCED_USE_CASE_KEYWORDS: &[KeywordRule] = &[
    KeywordRule {
        label: "Architectural design",
        any_of: &["architect"],
    },
    KeywordRule {
        label: "Interior design",
        any_of: &["interior designer"],
    },
    KeywordRule {
        label: "Real estate development",
        any_of: &["developer"],
    },
    KeywordRule {
        label: "Design education",
        any_of: &["student"],
    },
    KeywordRule {
        label: "Home renovation",
        any_of: &["homeowner"],
    },
    KeywordRule {
        label: "Professional design work",
        any_of: &["professional"],
    },
    KeywordRule {
        label: "Commercial projects",
        any_of: &["business"],
    },
];

pub const BASIC_USE_CASE_KEYWORDS: &[KeywordRule] = &[
    KeywordRule {
        label: "Suitable for architects",
        any_of: &["architect"],
    },
    KeywordRule {
        label: "Suitable for designers",
        any_of: &["designer"],
    },
    KeywordRule {
        label: "Suitable for developers",
        any_of: &["developer"],
    },
    KeywordRule {
        label: "Suitable for students",
        any_of: &["student"],
    },
    KeywordRule {
        label: "Suitable for professionals",
        any_of: &["professional"],
    },
];

pub const ENHANCED_TARGET_USER_KEYWORDS: &[KeywordRule] = &[
    KeywordRule {
        label: "Architects",
        any_of: &["architect"],
    },
    KeywordRule {
        label: "Interior designers",
        any_of: &["interior designer"],
    },
    KeywordRule {
        label: "Designers",
        any_of: &["designer"],
    },
    KeywordRule {
        label: "Developers",
        any_of: &["developer"],
    },
    KeywordRule {
        label: "Builders",
        any_of: &["builder"],
    },
    KeywordRule {
        label: "Contractors",
        any_of: &["contractor"],
    },
    KeywordRule {
        label: "Students",
        any_of: &["student"],
    },
    KeywordRule {
        label: "Educators",
        any_of: &["educator"],
    },
    KeywordRule {
        label: "Homeowners",
        any_of: &["homeowner"],
    },
    KeywordRule {
        label: "Real estate professionals",
        any_of: &["real estate"],
    },
    KeywordRule {
        label: "Professionals",
        any_of: &["professional"],
    },
    KeywordRule {
        label: "Businesses",
        any_of: &["company", "companies"],
    },
    KeywordRule {
        label: "Teams",
        any_of: &["team"],
    },
];

pub const BASIC_TARGET_USER_KEYWORDS: &[KeywordRule] = &[
    KeywordRule {
        label: "Architects",
        any_of: &["architect"],
    },
    KeywordRule {
        label: "Designers",
        any_of: &["designer"],
    },
    KeywordRule {
        label: "Developers",
        any_of: &["developer"],
    },
    KeywordRule {
        label: "Students",
        any_of: &["student"],
    },
    KeywordRule {
        label: "Professionals",
        any_of: &["professional"],
    },
    KeywordRule {
        label: "Businesses",
        any_of: &["company", "companies"],
    },
    KeywordRule {
        label: "Teams",
        any_of: &["team"],
    },
];

pub const ENHANCED_PLATFORM_KEYWORDS: &[KeywordRule] = &[
    KeywordRule {
        label: "Web",
        any_of: &["web", "browser", "online", "cloud", "saas"],
    },
    KeywordRule {
        label: "Windows",
        any_of: &["windows", "desktop"],
    },
    KeywordRule {
        label: "macOS",
        any_of: &["macos", "mac os", "osx"],
    },
    KeywordRule {
        label: "iOS",
        any_of: &["ios", "iphone", "ipad", "app store"],
    },
    KeywordRule {
        label: "Android",
        any_of: &["android", "google play", "apk"],
    },
    KeywordRule {
        label: "Linux",
        any_of: &["linux", "ubuntu"],
    },
];

pub const BASIC_PLATFORM_KEYWORDS: &[KeywordRule] = &[
    KeywordRule {
        label: "Web",
        any_of: &["web", "browser"],
    },
    KeywordRule {
        label: "Windows",
        any_of: &["windows", "download"],
    },
    KeywordRule {
        label: "macOS",
        any_of: &["macos", "osx"],
    },
    KeywordRule {
        label: "iOS",
        any_of: &["ios", "iphone"],
    },
    KeywordRule {
        label: "Android",
        any_of: &["android"],
    },
];

/// Capabilities reported under `technicalSpecs`, shared by both profiles.
pub const TECHNICAL_SPEC_KEYWORDS: &[KeywordRule] = &[
    KeywordRule {
        label: "API available",
        any_of: &["api", "developer"],
    },
    KeywordRule {
        label: "Mobile support",
        any_of: &["mobile", "app"],
    },
];

/// A [`KeywordRule`] with its alternatives compiled into one regex.
#[derive(Debug)]
pub(crate) struct CompiledKeyword {
    pub label: &'static str,
    regex: Regex,
}

impl CompiledKeyword {
    pub(crate) fn compile(rule: &KeywordRule) -> Self {
        let alternatives = rule
            .any_of
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");
        Self {
            label: rule.label,
            regex: compile_regex_unsafe(&format!(r"(?i)\b(?:{alternatives})"), rule.label),
        }
    }

    pub(crate) fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

pub(crate) fn compile_all(rules: &[KeywordRule]) -> Vec<CompiledKeyword> {
    rules.iter().map(CompiledKeyword::compile).collect()
}

/// Labels of every rule that matches `text`, in table order, without repeats.
pub(crate) fn matched_labels(rules: &[CompiledKeyword], text: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for rule in rules {
        if rule.is_match(text) && !labels.iter().any(|label| label == rule.label) {
            labels.push(rule.label.to_string());
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_has_labels_and_words() {
        let tables = [
            ENHANCED_USE_CASE_KEYWORDS,
            BASIC_USE_CASE_KEYWORDS,
            ENHANCED_TARGET_USER_KEYWORDS,
            BASIC_TARGET_USER_KEYWORDS,
            ENHANCED_PLATFORM_KEYWORDS,
            BASIC_PLATFORM_KEYWORDS,
            TECHNICAL_SPEC_KEYWORDS,
        ];
        for table in tables {
            for rule in table {
                assert!(!rule.label.is_empty());
                assert!(!rule.any_of.is_empty(), "{} has no words", rule.label);
                assert!(rule.any_of.iter().all(|w| !w.is_empty()));
            }
        }
    }

    #[test]
    fn test_keyword_matches_word_start_case_insensitive() {
        let rule = CompiledKeyword::compile(&KeywordRule {
            label: "Architects",
            any_of: &["architect"],
        });
        assert!(rule.is_match("Built for ARCHITECTS and studios"));
        assert!(rule.is_match("modern architecture"));
        assert!(!rule.is_match("landscapearchitect"));
    }

    #[test]
    fn test_multi_word_keyword() {
        let rule = CompiledKeyword::compile(&KeywordRule {
            label: "iOS",
            any_of: &["app store"],
        });
        assert!(rule.is_match("Download on the App Store"));
        assert!(!rule.is_match("app-store"));
    }

    #[test]
    fn test_matched_labels_keeps_table_order_and_dedupes() {
        let rules = compile_all(ENHANCED_PLATFORM_KEYWORDS);
        let labels = matched_labels(&rules, "Runs on Android, iPhone and in any browser online");
        assert_eq!(labels, vec!["Web", "iOS", "Android"]);
    }

    #[test]
    fn test_matched_labels_empty_text() {
        let rules = compile_all(ENHANCED_TARGET_USER_KEYWORDS);
        assert!(matched_labels(&rules, "").is_empty());
    }
}
