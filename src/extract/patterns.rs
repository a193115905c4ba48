//! Declarative pattern tables for the free-text extractors.
//!
//! Every cascade is a slice of rules evaluated in order; the extractors only
//! supply the driver loop and the acceptance filter. A rule's candidate is the
//! last capture group that participated in the match, so a rule may capture a
//! heading and its paragraph and still yield the paragraph.
//!
//! Patterns are written without flags and compiled case-insensitively.
//! Bounded repetitions (`[^<]{20,100}`) carry the length window of a
//! candidate; the extractor's own minimum length is checked on top of it.

use regex::{Captures, Regex};
use scraper::Selector;
use std::sync::LazyLock;

use super::keywords::{self, CompiledKeyword, KeywordRule};
use super::pricing::{PricingRule, BASIC_PRICING_RULES, ENHANCED_PRICING_RULES};
use super::Page;
use crate::config::ExtractionProfile;
use crate::utils::{compile_regex_unsafe, parse_selector_unsafe};

/// Which rendition of the page a rule is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// HTML with scripts, styles and comments removed.
    Markup,
    /// Visible text with tags collapsed to spaces.
    Text,
}

/// A named regular expression yielding one candidate per match.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub name: &'static str,
    pub scope: Scope,
    pub pattern: &'static str,
}

/// Where a description rule reads its candidate from.
#[derive(Debug, Clone, Copy)]
pub enum DescriptionSource {
    /// `content` attribute of every element matching the CSS selector.
    MetaContent(&'static str),
    /// Candidates of a pattern rule.
    Pattern(PatternRule),
}

#[derive(Debug, Clone, Copy)]
pub struct DescriptionRule {
    pub name: &'static str,
    pub source: DescriptionSource,
}

/// The full set of tables one profile extracts with.
#[derive(Debug, Clone, Copy)]
pub struct TableSet {
    pub description: &'static [DescriptionRule],
    /// Last-resort rule accepted without the quality filter.
    pub description_fallback: Option<PatternRule>,
    pub features: &'static [PatternRule],
    /// Rules whose `name` is emitted as the feature when the pattern matches.
    pub feature_keywords: &'static [PatternRule],
    pub use_case_phrases: &'static [PatternRule],
    pub use_case_keywords: &'static [KeywordRule],
    pub target_users: &'static [KeywordRule],
    pub platforms: &'static [KeywordRule],
    pub pricing: &'static [PricingRule],
    pub company_name: &'static [PatternRule],
    pub founded: &'static [PatternRule],
    pub headquarters: &'static [PatternRule],
    pub users: &'static [PatternRule],
    pub projects: &'static [PatternRule],
    pub countries: &'static [PatternRule],
}

const fn markup(name: &'static str, pattern: &'static str) -> PatternRule {
    PatternRule {
        name,
        scope: Scope::Markup,
        pattern,
    }
}

const fn text(name: &'static str, pattern: &'static str) -> PatternRule {
    PatternRule {
        name,
        scope: Scope::Text,
        pattern,
    }
}

const META_DESCRIPTION: DescriptionRule = DescriptionRule {
    name: "meta-description",
    source: DescriptionSource::MetaContent(r#"meta[name="description" i]"#),
};

pub const ENHANCED_DESCRIPTION_RULES: &[DescriptionRule] = &[
    META_DESCRIPTION,
    DescriptionRule {
        name: "og-description",
        source: DescriptionSource::MetaContent(r#"meta[property="og:description"]"#),
    },
    DescriptionRule {
        name: "hero-heading-paragraph",
        source: DescriptionSource::Pattern(markup(
            "hero-heading-paragraph",
            r#"<(?:div|section)[^>]*class=["'][^"']*hero[^"']*["'][^>]*>[\s\S]*?<h1(?:\s[^>]*)?>([^<]+)</h1>[\s\S]*?<p(?:\s[^>]*)?>([^<]+)</p>"#,
        )),
    },
    DescriptionRule {
        name: "hero-lead",
        source: DescriptionSource::Pattern(markup(
            "hero-lead",
            r#"<(?:div|section)[^>]*class=["'][^"']*hero[^"']*["'][^>]*>[\s\S]*?<p\s[^>]*class=["'][^"']*(?:lead|subtitle|tagline)[^"']*["'][^>]*>([^<]+)</p>"#,
        )),
    },
    DescriptionRule {
        name: "heading-paragraph",
        source: DescriptionSource::Pattern(markup(
            "heading-paragraph",
            r"<h1(?:\s[^>]*)?>([^<]{20,100})</h1>[\s\S]*?<p(?:\s[^>]*)?>([^<]{30,150})</p>",
        )),
    },
    DescriptionRule {
        name: "intro-paragraph",
        source: DescriptionSource::Pattern(markup(
            "intro-paragraph",
            r#"<div[^>]*class=["'][^"']*(?:intro|overview|summary)[^"']*["'][^>]*>[\s\S]*?<p(?:\s[^>]*)?>([^<]{40,200})</p>"#,
        )),
    },
    DescriptionRule {
        name: "long-paragraph",
        source: DescriptionSource::Pattern(markup(
            "long-paragraph",
            r"<p(?:\s[^>]*)?>([^<]{60,200})</p>",
        )),
    },
    DescriptionRule {
        name: "about-paragraph",
        source: DescriptionSource::Pattern(markup(
            "about-paragraph",
            r#"<div[^>]*class=["'][^"']*about[^"']*["'][^>]*>[\s\S]*?<p(?:\s[^>]*)?>([^<]{40,150})</p>"#,
        )),
    },
    DescriptionRule {
        name: "value-paragraph",
        source: DescriptionSource::Pattern(markup(
            "value-paragraph",
            r#"<(?:div|section)[^>]*class=["'][^"']*(?:value|proposition|mission)[^"']*["'][^>]*>[\s\S]*?<p(?:\s[^>]*)?>([^<]{40,200})</p>"#,
        )),
    },
];

pub const BASIC_DESCRIPTION_RULES: &[DescriptionRule] = &[
    META_DESCRIPTION,
    DescriptionRule {
        name: "heading",
        source: DescriptionSource::Pattern(markup("heading", r"<h1(?:\s[^>]*)?>([^<]+)<")),
    },
    DescriptionRule {
        name: "lead-paragraph",
        source: DescriptionSource::Pattern(markup(
            "lead-paragraph",
            r#"<p\s[^>]*class=["'][^"']*lead[^"']*["'][^>]*>([^<]+)<"#,
        )),
    },
    DescriptionRule {
        name: "subtitle-paragraph",
        source: DescriptionSource::Pattern(markup(
            "subtitle-paragraph",
            r#"<p\s[^>]*class=["'][^"']*subtitle[^"']*["'][^>]*>([^<]+)<"#,
        )),
    },
    DescriptionRule {
        name: "hero-paragraph",
        source: DescriptionSource::Pattern(markup(
            "hero-paragraph",
            r#"<div[^>]*class=["'][^"']*hero[^"']*["'][^>]*>[\s\S]*?<p(?:\s[^>]*)?>([^<]+)<"#,
        )),
    },
    DescriptionRule {
        name: "paragraph",
        source: DescriptionSource::Pattern(markup(
            "paragraph",
            r"<p(?:\s[^>]*)?>([^<]{30,200})</p>",
        )),
    },
];

pub const ENHANCED_DESCRIPTION_FALLBACK: PatternRule =
    markup("heading-fallback", r"<h1(?:\s[^>]*)?>([^<]{20,100})</h1>");

pub const ENHANCED_FEATURE_RULES: &[PatternRule] = &[
    markup(
        "feature-block",
        r#"<(?:li|div)\b[^>]*class=["'][^"']*(?:feature|benefit|capability|function)[^"']*["'][^>]*>[\s\S]*?<[^>]*>([^<]{15,120})</[^>]*>"#,
    ),
    markup(
        "feature-card",
        r#"<(?:div|section)[^>]*class=["'][^"']*(?:feature-card|feature-item)[^"']*["'][^>]*>[\s\S]*?<h3(?:\s[^>]*)?>([^<]{10,60})</h3>"#,
    ),
    markup(
        "icon-label",
        r#"<i\s[^>]*class=["'][^"']*(?:icon|fa-)[^"']*["'][^>]*>\s*</i>\s*<span(?:\s[^>]*)?>([^<]{10,80})</span>"#,
    ),
    markup("list-item", r"<li(?:\s[^>]*)?>([^<]{20,100})</li>"),
    markup("heading", r"<h[2-4](?:\s[^>]*)?>([^<]{15,80})</h[2-4]>"),
    markup(
        "check-item",
        r#"<div[^>]*class=["'][^"']*(?:check|tick|benefit)[^"']*["'][^>]*>[\s\S]*?<span(?:\s[^>]*)?>([^<]{15,100})</span>"#,
    ),
];

pub const BASIC_FEATURE_RULES: &[PatternRule] = &[
    markup("list-item", r"<li(?:\s[^>]*)?>([^<]{10,100})</li>"),
    markup(
        "feature-div",
        r#"<div[^>]*class=["'][^"']*feature[^"']*["'][^>]*>([^<]{10,100})</div>"#,
    ),
    markup("h3", r"<h3(?:\s[^>]*)?>([^<]{10,80})</h3>"),
    markup("h4", r"<h4(?:\s[^>]*)?>([^<]{10,80})</h4>"),
];

pub const FEATURE_KEYWORD_RULES: &[PatternRule] = &[
    text("AI-driven design", r"\bai\b[^.]{0,60}\bdesign"),
    text("Real-time rendering", r"\breal.?time\b[^.]{0,60}\brender"),
    text("Collaboration tools", r"\bcollaborat[^.]{0,60}\btool"),
    text("3D modeling", r"\b3d\b[^.]{0,60}\bmodel"),
    text("Floor plan generation", r"\bfloor[^.]{0,60}\bplan"),
    text("Automatic generation", r"\bautomatic[^.]{0,60}\bgenerat"),
    text("Virtual staging", r"\bvirtual[^.]{0,60}\bstaging"),
    text("Material selection", r"\bmaterial[^.]{0,60}\bselection"),
];

pub const USE_CASE_PHRASE_RULES: &[PatternRule] = &[
    text(
        "suited-for",
        r"\b(?:perfect|ideal|great|designed)\s+for\s+([^.<]{20,100})",
    ),
    text("helps", r"\b(?:helps?|enables?|allows?)\s+([^.<]{20,100})"),
    text("used-by", r"\b(?:used by|popular with)\s+([^.<]{20,80})"),
    markup(
        "use-case-section",
        r#"<(?:div|section)[^>]*class=["'][^"']*(?:use.?case|application|scenario)[^"']*["'][^>]*>[\s\S]*?<p(?:\s[^>]*)?>([^<]{20,100})</p>"#,
    ),
];

pub const ENHANCED_COMPANY_NAME_RULES: &[PatternRule] = &[
    markup(
        "labelled-company",
        r"(?:\bcompany|\babout|©|\bcopyright)[^:.<]{0,40}:\s*([^.<]{10,50})",
    ),
    markup("title", r"<title(?:\s[^>]*)?>([^<]{10,50})</title>"),
    markup(
        "brand-element",
        r#"<(?:div|span)[^>]*class=["'][^"']*(?:company|brand|logo)[^"']*["'][^>]*>([^<]{10,50})</"#,
    ),
];

pub const BASIC_COMPANY_NAME_RULES: &[PatternRule] = &[markup(
    "labelled-company",
    r"\b(?:company|about|founded|since)[^:.<]{0,40}:\s*([^.<]{2,80})",
)];

pub const ENHANCED_FOUNDED_RULES: &[PatternRule] = &[
    text(
        "labelled-year",
        r"\b(?:founded|established|since|started)[^:\d]{0,30}:\s*(\d{4})\b",
    ),
    text("since-year", r"\b(?:since|est\.?)\s*(\d{4})\b"),
    text("copyright-range", r"©\s*(\d{4})\s*[-–]\s*\d{4}"),
];

pub const BASIC_FOUNDED_RULES: &[PatternRule] = &[text(
    "founded-year",
    r"\b(?:founded|established|since)\s*(\d{4})\b",
)];

pub const HEADQUARTERS_RULES: &[PatternRule] = &[
    markup(
        "labelled-location",
        r"\b(?:headquarters|hq|based|located)[^:.<]{0,30}:\s*([^.<]{10,50})",
    ),
    markup("based-in", r"\b(?:based in|located in)\s+([^.<]{15,50})"),
];

/// A count such as `12,000`, `500+` or `10k`.
macro_rules! count {
    () => {
        r"\b(\d+(?:,\d+)*(?:\+|k\b|m\b)?)"
    };
}

pub const ENHANCED_USER_COUNT_RULES: &[PatternRule] = &[
    text(
        "users",
        concat!(count!(), r"\s*(?:users?|customers?|clients?)\b"),
    ),
    text("people", concat!(count!(), r"\s*(?:people|professionals)\b")),
    text(
        "over-users",
        concat!(r"\bover\s*", count!(), r"\s*(?:users?|customers?)\b"),
    ),
];

pub const BASIC_USER_COUNT_RULES: &[PatternRule] = &[text(
    "users",
    concat!(count!(), r"\s*(?:users|customers|clients)\b"),
)];

pub const ENHANCED_PROJECT_COUNT_RULES: &[PatternRule] = &[
    text(
        "projects",
        concat!(
            count!(),
            r"\s*(?:projects?|designs?|creations?|buildings?)\b"
        ),
    ),
    text(
        "over-projects",
        concat!(r"\bover\s*", count!(), r"\s*(?:projects?|designs?)\b"),
    ),
];

pub const BASIC_PROJECT_COUNT_RULES: &[PatternRule] = &[text(
    "projects",
    concat!(count!(), r"\s*(?:projects|designs|creations)\b"),
)];

pub const COUNTRY_COUNT_RULES: &[PatternRule] = &[
    text(
        "countries",
        concat!(count!(), r"\s*(?:countries|country|nations?)\b"),
    ),
    text(
        "serving-countries",
        concat!(r"\bserving\s*", count!(), r"\s*countr(?:y|ies)\b"),
    ),
];

pub const ENHANCED_TABLES: TableSet = TableSet {
    description: ENHANCED_DESCRIPTION_RULES,
    description_fallback: Some(ENHANCED_DESCRIPTION_FALLBACK),
    features: ENHANCED_FEATURE_RULES,
    feature_keywords: FEATURE_KEYWORD_RULES,
    use_case_phrases: USE_CASE_PHRASE_RULES,
    use_case_keywords: keywords::ENHANCED_USE_CASE_KEYWORDS,
    target_users: keywords::ENHANCED_TARGET_USER_KEYWORDS,
    platforms: keywords::ENHANCED_PLATFORM_KEYWORDS,
    pricing: ENHANCED_PRICING_RULES,
    company_name: ENHANCED_COMPANY_NAME_RULES,
    founded: ENHANCED_FOUNDED_RULES,
    headquarters: HEADQUARTERS_RULES,
    users: ENHANCED_USER_COUNT_RULES,
    projects: ENHANCED_PROJECT_COUNT_RULES,
    countries: COUNTRY_COUNT_RULES,
};

pub const BASIC_TABLES: TableSet = TableSet {
    description: BASIC_DESCRIPTION_RULES,
    description_fallback: None,
    features: BASIC_FEATURE_RULES,
    feature_keywords: &[],
    use_case_phrases: &[],
    use_case_keywords: keywords::BASIC_USE_CASE_KEYWORDS,
    target_users: keywords::BASIC_TARGET_USER_KEYWORDS,
    platforms: keywords::BASIC_PLATFORM_KEYWORDS,
    pricing: BASIC_PRICING_RULES,
    company_name: BASIC_COMPANY_NAME_RULES,
    founded: BASIC_FOUNDED_RULES,
    headquarters: &[],
    users: BASIC_USER_COUNT_RULES,
    projects: BASIC_PROJECT_COUNT_RULES,
    countries: &[],
};

/// A [`PatternRule`] with its regex compiled.
#[derive(Debug)]
pub(crate) struct CompiledRule {
    pub name: &'static str,
    scope: Scope,
    regex: Regex,
}

impl CompiledRule {
    fn compile(rule: &PatternRule) -> Self {
        Self {
            name: rule.name,
            scope: rule.scope,
            regex: compile_regex_unsafe(&format!("(?i){}", rule.pattern), rule.name),
        }
    }

    fn haystack<'p>(&self, page: &'p Page<'_>) -> &'p str {
        match self.scope {
            Scope::Markup => page.markup(),
            Scope::Text => page.text(),
        }
    }

    /// Every candidate this rule yields on `page`, in document order.
    pub(crate) fn candidates<'p>(&'p self, page: &'p Page<'_>) -> impl Iterator<Item = &'p str> {
        self.regex
            .captures_iter(self.haystack(page))
            .filter_map(last_group)
    }

    pub(crate) fn is_match(&self, page: &Page<'_>) -> bool {
        self.regex.is_match(self.haystack(page))
    }
}

fn last_group(caps: Captures<'_>) -> Option<&str> {
    caps.iter()
        .skip(1)
        .flatten()
        .last()
        .map(|m| m.as_str())
}

#[derive(Debug)]
pub(crate) enum CompiledDescription {
    Meta {
        name: &'static str,
        selector: Selector,
    },
    Pattern(CompiledRule),
}

impl CompiledDescription {
    fn compile(rule: &DescriptionRule) -> Self {
        match rule.source {
            DescriptionSource::MetaContent(selector) => CompiledDescription::Meta {
                name: rule.name,
                selector: parse_selector_unsafe(selector, rule.name),
            },
            DescriptionSource::Pattern(pattern) => {
                CompiledDescription::Pattern(CompiledRule::compile(&pattern))
            }
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            CompiledDescription::Meta { name, .. } => *name,
            CompiledDescription::Pattern(rule) => rule.name,
        }
    }
}

/// A [`TableSet`] compiled once per process.
#[derive(Debug)]
pub struct PatternTables {
    pub(crate) description: Vec<CompiledDescription>,
    pub(crate) description_fallback: Option<CompiledRule>,
    pub(crate) features: Vec<CompiledRule>,
    pub(crate) feature_keywords: Vec<CompiledRule>,
    pub(crate) use_case_phrases: Vec<CompiledRule>,
    pub(crate) use_case_keywords: Vec<CompiledKeyword>,
    pub(crate) target_users: Vec<CompiledKeyword>,
    pub(crate) platforms: Vec<CompiledKeyword>,
    pub(crate) technical_specs: Vec<CompiledKeyword>,
    pub(crate) pricing: &'static [PricingRule],
    pub(crate) company_name: Vec<CompiledRule>,
    pub(crate) founded: Vec<CompiledRule>,
    pub(crate) headquarters: Vec<CompiledRule>,
    pub(crate) users: Vec<CompiledRule>,
    pub(crate) projects: Vec<CompiledRule>,
    pub(crate) countries: Vec<CompiledRule>,
}

fn compile_rules(rules: &[PatternRule]) -> Vec<CompiledRule> {
    rules.iter().map(CompiledRule::compile).collect()
}

impl PatternTables {
    /// Compiles every rule of `set`.
    ///
    /// # Panics
    ///
    /// Panics if a pattern or selector in the table does not compile.
    pub fn compile(set: &TableSet) -> Self {
        Self {
            description: set
                .description
                .iter()
                .map(CompiledDescription::compile)
                .collect(),
            description_fallback: set.description_fallback.as_ref().map(CompiledRule::compile),
            features: compile_rules(set.features),
            feature_keywords: compile_rules(set.feature_keywords),
            use_case_phrases: compile_rules(set.use_case_phrases),
            use_case_keywords: keywords::compile_all(set.use_case_keywords),
            target_users: keywords::compile_all(set.target_users),
            platforms: keywords::compile_all(set.platforms),
            technical_specs: keywords::compile_all(keywords::TECHNICAL_SPEC_KEYWORDS),
            pricing: set.pricing,
            company_name: compile_rules(set.company_name),
            founded: compile_rules(set.founded),
            headquarters: compile_rules(set.headquarters),
            users: compile_rules(set.users),
            projects: compile_rules(set.projects),
            countries: compile_rules(set.countries),
        }
    }
}

static ENHANCED_COMPILED: LazyLock<PatternTables> =
    LazyLock::new(|| PatternTables::compile(&ENHANCED_TABLES));
static BASIC_COMPILED: LazyLock<PatternTables> =
    LazyLock::new(|| PatternTables::compile(&BASIC_TABLES));

/// The compiled tables for `profile`.
pub fn tables_for(profile: ExtractionProfile) -> &'static PatternTables {
    match profile {
        ExtractionProfile::Enhanced => LazyLock::force(&ENHANCED_COMPILED),
        ExtractionProfile::Basic => LazyLock::force(&BASIC_COMPILED),
    }
}
