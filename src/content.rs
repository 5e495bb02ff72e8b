//! Content Source
//!
//! Static page content, one JSON document per locale, embedded at compile time.

use std::collections::HashSet;
use std::fmt;

use crate::error::ContentError;
use crate::models::PortfolioContent;

const EN_JSON: &str = include_str!("../content/en.json");
const FR_JSON: &str = include_str!("../content/fr.json");

/// Available content languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Parse a BCP 47 tag, matching on the primary language only ("fr-CI" -> Fr)
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            _ => None,
        }
    }

    /// Browser language if supported, else `fallback`
    pub fn detect(fallback: &str) -> Self {
        let fallback = Self::from_tag(fallback).unwrap_or_default();
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .and_then(|tag| Self::from_tag(&tag))
            .unwrap_or(fallback)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Locale::En => Locale::Fr,
            Locale::Fr => Locale::En,
        }
    }

    fn document(&self) -> &'static str {
        match self {
            Locale::En => EN_JSON,
            Locale::Fr => FR_JSON,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse the embedded document for `locale`
pub fn load_content(locale: Locale) -> Result<PortfolioContent, ContentError> {
    let content: PortfolioContent = serde_json::from_str(locale.document())
        .map_err(|source| ContentError::Parse { locale, source })?;
    for issue in validate(&content) {
        log::warn!(target: "content", "[{}] {}", locale, issue);
    }
    log::info!(
        target: "content",
        "loaded {} content: {} projects, {} experiences",
        locale,
        content.projects.len(),
        content.experiences.len()
    );
    Ok(content)
}

/// Report content problems. Rendering still proceeds with whatever is there.
pub fn validate(content: &PortfolioContent) -> Vec<String> {
    let mut issues = Vec::new();
    duplicate_ids("projects", content.projects.iter().map(|p| p.id.as_str()), &mut issues);
    duplicate_ids("experiences", content.experiences.iter().map(|e| e.id.as_str()), &mut issues);
    duplicate_ids("team_projects", content.team_projects.iter().map(|t| t.id.as_str()), &mut issues);
    duplicate_ids("testimonials", content.testimonials.iter().map(|t| t.id.as_str()), &mut issues);

    for t in &content.testimonials {
        if !(1..=5).contains(&t.rating) {
            issues.push(format!("testimonial {} has rating {} outside 1..=5", t.id, t.rating));
        }
    }
    for s in &content.skills {
        if s.proficiency > 100 {
            issues.push(format!("skill {} has proficiency {} above 100", s.name, s.proficiency));
        }
    }
    for p in &content.projects {
        if p.category.as_deref().map_or(true, |c| c.trim().is_empty()) {
            issues.push(format!("project {} has no category, only shown under \"all\"", p.id));
        }
    }
    issues
}

fn duplicate_ids<'a>(catalog: &str, ids: impl Iterator<Item = &'a str>, issues: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(format!("duplicate id {:?} in {}", id, catalog));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_disclosure::derive_categories;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_locales_parse_cleanly() {
        for locale in Locale::ALL {
            let content = load_content(locale).unwrap();
            assert!(!content.projects.is_empty());
            assert_eq!(validate(&content), Vec::<String>::new(), "locale {}", locale);
        }
    }

    #[test]
    fn test_locales_share_catalog_keys() {
        let en = load_content(Locale::En).unwrap();
        let fr = load_content(Locale::Fr).unwrap();
        let ids = |c: &PortfolioContent| c.projects.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&en), ids(&fr));
        assert_eq!(derive_categories(&en.projects), derive_categories(&fr.projects));
        assert_eq!(derive_categories(&en.experiences), derive_categories(&fr.experiences));
        let nav = |c: &PortfolioContent| c.nav.iter().map(|n| n.id.clone()).collect::<Vec<_>>();
        assert_eq!(nav(&en), nav(&fr));
    }

    #[test]
    fn test_gallery_has_featured_and_more_than_a_page() {
        let en = load_content(Locale::En).unwrap();
        let featured = en.projects.iter().filter(|p| p.featured).count();
        assert!(featured > 0);
        assert!(en.projects.len() - featured > leptos_disclosure::DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_validate_reports_duplicates_and_ratings() {
        let mut content = load_content(Locale::En).unwrap();
        let dup = content.projects[0].clone();
        content.projects.push(dup);
        content.testimonials[0].rating = 9;
        let issues = validate(&content);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("duplicate id"));
        assert!(issues[1].contains("rating 9"));
    }

    #[test]
    fn test_locale_tags() {
        assert_eq!(Locale::from_tag("fr-CI"), Some(Locale::Fr));
        assert_eq!(Locale::from_tag("EN_us"), Some(Locale::En));
        assert_eq!(Locale::from_tag("de"), None);
        assert_eq!(Locale::Fr.toggled(), Locale::En);
    }
}
