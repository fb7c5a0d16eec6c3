//! Demonstration-only analysis variant.
//!
//! Nothing here contacts a backend: the result is synthesized from an
//! injected randomness source and the caller's own input strings. The
//! numeric ranges below are the documented contract of the demo.

use rand::Rng;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Fixed artificial delay applied before a demo result is shown
pub const ANALYSIS_DELAY: Duration = Duration::from_secs(4);

/// Input problems the demo variant can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter both URL and target keyword.")]
    MissingField,

    #[error("Please enter a valid URL starting with http:// or https://")]
    InvalidUrl,
}

/// Social share counts for the analyzed page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialSignals {
    pub facebook: u32,
    pub twitter: u32,
    pub linkedin: u32,
}

/// Fixed-shape simulated analysis result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatedAnalysis {
    pub current_title: String,
    pub suggested_title: String,
    pub current_meta: String,
    pub suggested_meta: String,
    /// Keyword density percentage, in [0.5, 3.5)
    pub keyword_density: f64,
    pub suggestions: Vec<String>,
    pub competitor_insights: Vec<String>,
    /// Readability score, in [70, 100)
    pub readability_score: u32,
    /// Word count, in [800, 2800)
    pub word_count: u32,
    pub heading_structure: Vec<String>,
    /// Image count, in [5, 20)
    pub image_count: u32,
    /// Internal link count, in [10, 30)
    pub internal_links: u32,
    /// External link count, in [2, 10)
    pub external_links: u32,
    /// Page speed score, in [60, 100)
    pub page_speed: u32,
    /// True with probability 0.7
    pub mobile_friendly: bool,
    pub ssl_secure: bool,
    /// "N years" with N in [2, 12)
    pub domain_age: String,
    pub social_signals: SocialSignals,
}

/// Checks the two demo preconditions: both fields present, URL valid
pub fn validate(url: &str, keyword: &str) -> Result<(), InputError> {
    if url.trim().is_empty() || keyword.trim().is_empty() {
        return Err(InputError::MissingField);
    }
    if !is_valid_url(url) {
        return Err(InputError::InvalidUrl);
    }
    Ok(())
}

fn is_valid_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.scheme() == "http" || parsed.scheme() == "https",
        Err(_) => false,
    }
}

/// Returns the URL's host, or the raw input when it does not parse
pub fn extract_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

/// Synthesizes an analysis for the given inputs from `rng`.
///
/// The keyword is interpolated verbatim (case preserved as typed) into
/// every text field; numeric fields are drawn uniformly from the ranges
/// documented on [`SimulatedAnalysis`].
pub fn simulate<R: Rng>(
    rng: &mut R,
    url: &str,
    keyword: &str,
) -> Result<SimulatedAnalysis, InputError> {
    validate(url, keyword)?;

    let domain = extract_domain(url);

    Ok(SimulatedAnalysis {
        current_title: format!("{domain} - {keyword} Solutions and Services"),
        suggested_title: format!("Best {keyword} Services in {domain} | Expert Solutions 2024"),
        current_meta: format!(
            "Find {keyword} services and solutions. Professional {keyword} experts ready to help."
        ),
        suggested_meta: format!(
            "Discover top-rated {keyword} services in {domain}. Expert {keyword} solutions with proven results. Get free consultation today!"
        ),
        keyword_density: rng.gen_range(0.5..3.5),
        suggestions: vec![
            format!("Include \"{keyword}\" in your H1 heading for better SEO impact"),
            format!("Add \"{keyword}\" to the first 100 words of your content"),
            format!("Create internal links using \"{keyword}\" as anchor text"),
            format!("Optimize images with ALT tags containing \"{keyword}\""),
            format!("Add a FAQ section targeting \"{keyword}\" related questions"),
            format!("Include customer testimonials mentioning \"{keyword}\""),
            "Add schema markup for better search engine understanding".to_string(),
            format!("Create a dedicated landing page for \"{keyword}\" services"),
        ],
        competitor_insights: vec![
            format!("Top-ranking pages for \"{keyword}\" average 2,500+ words"),
            format!("Competitors use question-based H2 headings with \"{keyword}\""),
            "Most successful pages include case studies and client examples".to_string(),
            "Schema markup implementation increases visibility by 35%".to_string(),
            format!("Pages with video content rank 50% higher for \"{keyword}\""),
            format!("Local SEO optimization crucial for \"{keyword}\" searches"),
        ],
        readability_score: rng.gen_range(70..100),
        word_count: rng.gen_range(800..2800),
        heading_structure: vec![
            format!("H1: {keyword} Services"),
            format!("H2: Why Choose Our {keyword} Solutions"),
            format!("H2: {keyword} Process and Methodology"),
            format!("H3: Step 1: {keyword} Assessment"),
            format!("H3: Step 2: {keyword} Implementation"),
            format!("H2: {keyword} Case Studies"),
            format!("H2: {keyword} FAQ"),
        ],
        image_count: rng.gen_range(5..20),
        internal_links: rng.gen_range(10..30),
        external_links: rng.gen_range(2..10),
        page_speed: rng.gen_range(60..100),
        mobile_friendly: rng.gen_bool(0.7),
        ssl_secure: true,
        domain_age: format!("{} years", rng.gen_range(2..12)),
        social_signals: SocialSignals {
            facebook: rng.gen_range(50..550),
            twitter: rng.gen_range(30..330),
            linkedin: rng.gen_range(20..220),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_missing_fields_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            simulate(&mut rng, "", "coffee"),
            Err(InputError::MissingField)
        );
        assert_eq!(
            simulate(&mut rng, "https://example.com", "   "),
            Err(InputError::MissingField)
        );
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            simulate(&mut rng, "not a url", "coffee"),
            Err(InputError::InvalidUrl)
        );
        assert_eq!(
            simulate(&mut rng, "ftp://example.com", "coffee"),
            Err(InputError::InvalidUrl)
        );
    }

    #[test]
    fn test_numeric_fields_stay_in_range() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let analysis = simulate(&mut rng, "https://example.com/page", "coffee").unwrap();

            assert!((0.5..3.5).contains(&analysis.keyword_density));
            assert!((70..100).contains(&analysis.readability_score));
            assert!((800..2800).contains(&analysis.word_count));
            assert!((5..20).contains(&analysis.image_count));
            assert!((10..30).contains(&analysis.internal_links));
            assert!((2..10).contains(&analysis.external_links));
            assert!((60..100).contains(&analysis.page_speed));
            assert!(analysis.ssl_secure);
        }
    }

    #[test]
    fn test_domain_age_range() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let analysis = simulate(&mut rng, "https://example.com", "kw").unwrap();
            let years: u32 = analysis
                .domain_age
                .strip_suffix(" years")
                .unwrap()
                .parse()
                .unwrap();
            assert!((2..12).contains(&years));
        }
    }

    #[test]
    fn test_keyword_kept_verbatim() {
        let mut rng = StdRng::seed_from_u64(7);
        let keyword = "Espresso Machines";
        let analysis = simulate(&mut rng, "https://example.com", keyword).unwrap();

        assert!(analysis.current_title.contains(keyword));
        assert!(analysis.suggested_title.contains(keyword));
        assert!(analysis.current_meta.contains(keyword));
        assert!(analysis.suggested_meta.contains(keyword));
        for heading in &analysis.heading_structure {
            assert!(heading.contains(keyword));
        }
        // The case the user typed survives, never a lowercased copy
        assert!(!analysis.current_title.contains("espresso machines"));
    }

    #[test]
    fn test_domain_interpolated() {
        let mut rng = StdRng::seed_from_u64(7);
        let analysis = simulate(&mut rng, "https://shop.example.org/beans?sort=asc", "kw").unwrap();
        assert!(analysis.current_title.starts_with("shop.example.org"));
        assert!(analysis.suggested_meta.contains("shop.example.org"));
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        assert_eq!(
            simulate(&mut first, "https://example.com", "coffee").unwrap(),
            simulate(&mut second, "https://example.com", "coffee").unwrap()
        );
    }

    #[test]
    fn test_extract_domain_falls_back_to_input() {
        assert_eq!(extract_domain("https://example.com/a"), "example.com");
        assert_eq!(extract_domain("nonsense"), "nonsense");
    }
}
