// Extract module tests.

use super::*;
use crate::config::{
    DESCRIPTION_PLACEHOLDER, FEATURES_PLACEHOLDER, PLATFORM_PLACEHOLDER, TARGET_USERS_PLACEHOLDER,
    USE_CASE_PLACEHOLDER,
};

fn enhanced() -> Extractor {
    Extractor::new(ExtractionProfile::Enhanced)
}

fn basic() -> Extractor {
    Extractor::new(ExtractionProfile::Basic)
}

#[test]
fn test_page_strips_scripts_styles_and_comments() {
    let html = r#"<html><head><style>.hero { color: red }</style></head><body>
        <script>var x = "<li>Injected list item from script code</li>";</script>
        <!-- <p>commented out paragraph</p> -->
        <p>Visible</p></body></html>"#;
    let page = Page::parse(html);
    assert!(!page.markup().contains("Injected"));
    assert!(!page.markup().contains("commented out"));
    assert!(!page.lower().contains(".hero"));
    assert_eq!(page.text(), "Visible");
    assert_eq!(page.raw(), html);
}

#[test]
fn test_extraction_accessors() {
    let found = Extraction::Found("a".to_string());
    let placeholder = Extraction::Placeholder("b".to_string());
    assert!(found.is_found());
    assert!(!placeholder.is_found());
    assert_eq!(placeholder.value(), "b");
    assert_eq!(found.clone().into_value(), "a");
    assert_eq!(found.found(), Some("a".to_string()));
    assert_eq!(placeholder.found(), None);
}

// Description

#[test]
fn test_description_from_meta_only_page() {
    let html = r#"<html><head><meta name="description" content="Generate floor plans with AI in seconds."></head><body></body></html>"#;
    let page = Page::parse(html);
    for extractor in [enhanced(), basic()] {
        assert_eq!(
            extractor.extract_description(&page, 20),
            Extraction::Found("Generate floor plans with AI in seconds.".to_string())
        );
    }
}

#[test]
fn test_description_meta_name_is_case_insensitive() {
    let html = r#"<html><head><META NAME="Description" content="Generate floor plans with AI in seconds."></head></html>"#;
    let page = Page::parse(html);
    for extractor in [enhanced(), basic()] {
        assert_eq!(
            extractor.extract_description(&page, 20),
            Extraction::Found("Generate floor plans with AI in seconds.".to_string())
        );
    }
}

#[test]
fn test_description_meta_entities_and_whitespace_cleaned() {
    let html = r#"<meta name="description" content="  Render   interiors &amp; exteriors from one model  ">"#;
    let page = Page::parse(html);
    assert_eq!(
        enhanced().extract_description(&page, 20),
        Extraction::Found("Render interiors & exteriors from one model".to_string())
    );
}

#[test]
fn test_description_hero_paragraph_after_heading() {
    let html = r#"<html><body>
        <div class="hero-banner"><h1>Planform</h1>
        <p>Turn rough sketches into finished floor plans in minutes.</p></div>
        </body></html>"#;
    let page = Page::parse(html);
    assert_eq!(
        enhanced().extract_description(&page, 40),
        Extraction::Found("Turn rough sketches into finished floor plans in minutes.".to_string())
    );
}

#[test]
fn test_description_skips_boilerplate_meta() {
    let html = r#"<html><head>
        <meta name="description" content="Home of the best architecture rendering tools online">
        </head><body>
        <p>Photorealistic renders of your architectural models, generated directly in the browser.</p>
        </body></html>"#;
    let page = Page::parse(html);
    assert_eq!(
        enhanced().extract_description(&page, 20),
        Extraction::Found(
            "Photorealistic renders of your architectural models, generated directly in the browser."
                .to_string()
        )
    );
}

#[test]
fn test_description_heading_fallback_skips_quality_filter() {
    let html = "<html><body><h1>Planform AI Floor Plans</h1></body></html>";
    let page = Page::parse(html);
    assert_eq!(
        enhanced().extract_description(&page, 20),
        Extraction::Found("Planform AI Floor Plans".to_string())
    );
}

#[test]
fn test_description_placeholder_when_nothing_qualifies() {
    let page = Page::parse("<html><body><p>Hi</p></body></html>");
    assert_eq!(
        enhanced().extract_description(&page, 20),
        Extraction::Placeholder(DESCRIPTION_PLACEHOLDER.to_string())
    );
}

#[test]
fn test_description_respects_min_chars() {
    let html = r#"<meta name="description" content="Generate floor plans with AI in seconds.">"#;
    let page = Page::parse(html);
    assert!(!enhanced().extract_description(&page, 80).is_found());
}

#[test]
fn test_basic_description_rejects_navigation_only() {
    let html = r#"<html><body>
        <h1>Contact our sales team today</h1>
        <p class="lead">Fast architectural renders for small studios</p>
        </body></html>"#;
    let page = Page::parse(html);
    assert_eq!(
        basic().extract_description(&page, 20),
        Extraction::Found("Fast architectural renders for small studios".to_string())
    );
}

// Features

const FEATURE_PAGE: &str = r#"<html><body><ul>
    <li>Generate floor plans from a simple sketch</li>
    <li>Generate floor plans from a simple sketch</li>
    <li>Export drawings to every major CAD format</li>
    <li>Contact our team for a custom demo today</li>
    <li>Use the const keyword in every template</li>
    </ul>
    <h2>Photorealistic renders in under one minute</h2>
    </body></html>"#;

#[test]
fn test_features_filtered_deduplicated_and_topped_up() {
    let page = Page::parse(FEATURE_PAGE);
    assert_eq!(
        enhanced().extract_features(&page, 8),
        Extraction::Found(vec![
            "Generate floor plans from a simple sketch".to_string(),
            "Export drawings to every major CAD format".to_string(),
            "Photorealistic renders in under one minute".to_string(),
            "Floor plan generation".to_string(),
        ])
    );
}

#[test]
fn test_features_capped_at_max() {
    let page = Page::parse(FEATURE_PAGE);
    let features = enhanced().extract_features(&page, 2).into_value();
    assert_eq!(
        features,
        vec![
            "Generate floor plans from a simple sketch",
            "Export drawings to every major CAD format"
        ]
    );
}

#[test]
fn test_features_placeholder() {
    let page = Page::parse("<p>nothing</p>");
    assert_eq!(
        enhanced().extract_features(&page, 5),
        Extraction::Placeholder(vec![FEATURES_PLACEHOLDER.to_string()])
    );
}

#[test]
fn test_basic_features_accept_short_items() {
    let page = Page::parse("<ul><li>Home</li><li>Cloud rendering</li></ul>");
    assert_eq!(
        basic().extract_features(&page, 3),
        Extraction::Found(vec!["Cloud rendering".to_string()])
    );
}

#[test]
fn test_feature_card_heading() {
    let html = r#"<div class="feature-card"><img src="x.png"><h3>Smart room layouts</h3></div>"#;
    let page = Page::parse(html);
    // Three words fail the quality filter; only the keyword table can help here
    assert!(!enhanced().extract_features(&page, 3).is_found());

    let html = r#"<div class="feature-card"><h3>Smart room layouts for any plot</h3></div>"#;
    let page = Page::parse(html);
    assert_eq!(
        enhanced().extract_features(&page, 3).into_value(),
        vec!["Smart room layouts for any plot"]
    );
}

// Pricing

#[test]
fn test_pricing_subscription_beats_free_and_one_time() {
    let html = r#"<html><body><ul>
        <li>pricing tiers available</li>
        <li>pricing tiers available</li>
        <li>pricing tiers available</li>
        </ul><p>Subscribe monthly for $10</p></body></html>"#;
    let page = Page::parse(html);
    let pricing = enhanced().extract_pricing_info(&page);
    assert_eq!(pricing, Extraction::Found(PricingModel::Subscription));
    assert_eq!(pricing.value().category(), "subscription");
    assert_eq!(
        basic().extract_pricing_info(&page),
        Extraction::Found(PricingModel::Subscription)
    );
}

#[test]
fn test_pricing_placeholder_without_vocabulary() {
    let page = Page::parse("<p>Render faster</p>");
    assert_eq!(
        enhanced().extract_pricing_info(&page),
        Extraction::Placeholder(PricingModel::Unknown)
    );
    assert_eq!(
        enhanced().extract_basic_pricing(&page),
        Extraction::Placeholder(PricingModel::Unknown)
    );
}

#[test]
fn test_pricing_case_insensitive() {
    let page = Page::parse("<h2>FREE TRIAL</h2>");
    assert_eq!(
        enhanced().extract_pricing_info(&page),
        Extraction::Found(PricingModel::FreeTrial)
    );
    assert_eq!(
        basic().extract_basic_pricing(&page),
        Extraction::Found(PricingModel::Free)
    );
}

// Use cases, audiences, platforms

#[test]
fn test_use_cases_phrases_then_keywords() {
    let html = "<p>Perfect for architects who need fast concept renders.</p>\
                <p>Loved by homeowners and students.</p>";
    let page = Page::parse(html);
    assert_eq!(
        enhanced().extract_use_cases(&page, 3),
        Extraction::Found(vec![
            "architects who need fast concept renders".to_string(),
            "Architectural design".to_string(),
            "Design education".to_string(),
        ])
    );
}

#[test]
fn test_use_cases_placeholder() {
    let page = Page::parse("<p>Nothing</p>");
    assert_eq!(
        enhanced().extract_use_cases(&page, 2),
        Extraction::Placeholder(vec![USE_CASE_PLACEHOLDER.to_string()])
    );
}

#[test]
fn test_basic_use_cases_use_keywords_only() {
    let page = Page::parse("<p>Perfect for architects and designers everywhere.</p>");
    assert_eq!(
        basic().extract_use_cases(&page, 2),
        Extraction::Found(vec![
            "Suitable for architects".to_string(),
            "Suitable for designers".to_string(),
        ])
    );
}

#[test]
fn test_target_users() {
    let page = Page::parse("<p>Built for architects, interior designers and real estate teams.</p>");
    assert_eq!(
        enhanced().extract_target_users(&page),
        Extraction::Found(vec![
            "Architects".to_string(),
            "Interior designers".to_string(),
            "Designers".to_string(),
            "Real estate professionals".to_string(),
            "Teams".to_string(),
        ])
    );
    assert_eq!(
        enhanced().extract_target_users(&Page::parse("<p>Nothing</p>")),
        Extraction::Placeholder(vec![TARGET_USERS_PLACEHOLDER.to_string()])
    );
}

#[test]
fn test_platforms() {
    let page = Page::parse("<p>Available on the web, for iPad and Android.</p>");
    assert_eq!(
        enhanced().extract_platforms(&page),
        Extraction::Found(vec![
            "Web".to_string(),
            "iOS".to_string(),
            "Android".to_string()
        ])
    );
    assert_eq!(
        enhanced().extract_platforms(&Page::parse("<p>Nothing</p>")),
        Extraction::Placeholder(vec![PLATFORM_PLACEHOLDER.to_string()])
    );
}

#[test]
fn test_platform_keywords_ignore_markup() {
    // "web" inside a class name or URL is not visible text
    let page = Page::parse(r#"<a class="webflow" href="https://web.example.com">Nothing</a>"#);
    assert!(!enhanced().extract_platforms(&page).is_found());
}

// Company info, stats, specs, social

const COMPANY_PAGE: &str = r#"<html><head><title>Planform Floor Plans</title></head><body>
    <footer><p>Headquarters: Berlin, Germany</p><p>© 2019 - 2025 Planform Labs</p></footer>
    </body></html>"#;

#[test]
fn test_company_info() {
    let page = Page::parse(COMPANY_PAGE);
    assert_eq!(
        enhanced().extract_company_info(&page),
        Some(CompanyInfo {
            name: Some("Planform Floor Plans".to_string()),
            founded: Some(2019),
            headquarters: Some("Berlin, Germany".to_string()),
        })
    );
}

#[test]
fn test_company_info_absent_is_none() {
    let page = Page::parse("<p>Nothing here</p>");
    assert_eq!(enhanced().extract_company_info(&page), None);
    assert_eq!(basic().extract_company_info(&page), None);
}

#[test]
fn test_founded_year_out_of_range_ignored() {
    let page = Page::parse("<p>Serving drafters since 1970 with care</p>");
    assert_eq!(enhanced().extract_company_info(&page), None);
}

#[test]
fn test_user_stats() {
    let page = Page::parse(
        "<p>Trusted by 10,000+ users in 40 countries, with over 2M projects created.</p>",
    );
    assert_eq!(
        enhanced().extract_user_stats(&page),
        Some(UserStats {
            users: Some("10,000+".to_string()),
            projects: Some("2M".to_string()),
            countries: Some("40".to_string()),
        })
    );
    assert_eq!(enhanced().extract_user_stats(&Page::parse("<p>None</p>")), None);
}

#[test]
fn test_technical_specs() {
    let page = Page::parse("<p>Open API and a mobile app</p>");
    assert_eq!(
        enhanced().extract_technical_specs(&page),
        Some(vec!["API available".to_string(), "Mobile support".to_string()])
    );
    assert_eq!(
        enhanced().extract_technical_specs(&Page::parse("<p>Plain page</p>")),
        None
    );
}

#[test]
fn test_social_links_first_per_platform() {
    let html = r#"<footer>
        <a href="https://twitter.com/planform">t</a>
        <a href="//www.linkedin.com/company/planform/">l</a>
        <a href="https://twitter.com/other">t2</a>
        <a href="https://github.com">gh root</a>
        <a href="/about">about</a>
        </footer>"#;
    let page = Page::parse(html);
    let links = enhanced().extract_social_links(&page).expect("links expected");
    assert_eq!(links.len(), 2);
    assert_eq!(links["twitter"], "https://twitter.com/planform");
    assert_eq!(links["linkedin"], "https://www.linkedin.com/company/planform/");
    assert_eq!(
        enhanced().extract_social_links(&Page::parse("<a href=\"/x\">x</a>")),
        None
    );
}

#[test]
fn test_social_share_links_do_not_hide_profile() {
    let html = r#"<div class="share">
        <a href="https://twitter.com/intent/tweet?text=Planform">Tweet</a>
        <a href="https://x.com/share?url=planform.ai">Share</a>
        <a href="https://www.facebook.com/sharer/sharer.php?u=planform.ai">Share</a>
        </div>
        <footer>
        <a href="https://x.com/planform">x</a>
        <a href="https://www.facebook.com/planformai">fb</a>
        </footer>"#;
    let page = Page::parse(html);
    let links = enhanced().extract_social_links(&page).expect("links expected");
    assert_eq!(links["twitter"], "https://x.com/planform");
    assert_eq!(links["facebook"], "https://www.facebook.com/planformai");

    let only_share = Page::parse(r#"<a href="https://twitter.com/Home">home</a>"#);
    assert_eq!(enhanced().extract_social_links(&only_share), None);
}

// Properties

use proptest::prelude::*;

fn run_every_extractor(extractor: &Extractor, page: &Page<'_>) {
    let _ = extractor.extract_description(page, 20);
    let _ = extractor.extract_features(page, 8);
    let _ = extractor.extract_pricing_info(page);
    let _ = extractor.extract_basic_pricing(page);
    let _ = extractor.extract_use_cases(page, 3);
    let _ = extractor.extract_target_users(page);
    let _ = extractor.extract_platforms(page);
    let _ = extractor.extract_company_info(page);
    let _ = extractor.extract_user_stats(page);
    let _ = extractor.extract_technical_specs(page);
    let _ = extractor.extract_social_links(page);
}

proptest! {
    #[test]
    fn test_extractors_never_panic_on_arbitrary_text(input in ".{0,400}") {
        let page = Page::parse(&input);
        run_every_extractor(&enhanced(), &page);
        run_every_extractor(&basic(), &page);
    }

    #[test]
    fn test_extractors_never_panic_on_tag_soup(
        parts in prop::collection::vec(
            prop::sample::select(vec![
                "<div class=\"hero\">", "</div>", "<h1>", "</h1>", "<p>", "</p>", "<li>",
                "<li", "</li>", "<section class='pricing'>", "&amp;", "&lt;", "©", "<i class=\"icon\"></i>",
                "<span>", "Generate floor plans with AI in seconds", "free", "$", " ", "<!--", "-->",
                "<script>", "</script>", "<meta name=\"description\" content=\"", "\">", "é", "2019",
            ]),
            0..60,
        )
    ) {
        let html = parts.concat();
        let page = Page::parse(&html);
        run_every_extractor(&enhanced(), &page);
        run_every_extractor(&basic(), &page);
    }

    #[test]
    fn test_clean_text_idempotent(input in ".{0,200}") {
        let once = clean_text(&input);
        prop_assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn test_clean_text_idempotent_on_markup(
        parts in prop::collection::vec(
            prop::sample::select(vec!["<b>", "</b>", "&amp;", "lt;", "gt;", "&", "<", ">", "a", " ", "\n"]),
            0..40,
        )
    ) {
        let once = clean_text(&parts.concat());
        prop_assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn test_quality_rejects_boilerplate_in_any_case(
        phrase in prop::sample::select(text::BOILERPLATE_PHRASES.to_vec()),
        casing in prop::collection::vec(any::<bool>(), 32),
    ) {
        let mixed: String = phrase
            .chars()
            .zip(casing.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
            .collect();
        let sentence = format!("{mixed} and then plenty of further words follow");
        prop_assert!(!is_quality_content(&sentence));
    }
}
