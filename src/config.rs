//! Site Configuration
//!
//! Tunables read from the embedded `content/site.json`.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Project gallery: cards per "show more" page
    pub gallery_page_size: usize,
    /// Experience timeline: entries per page
    pub timeline_page_size: usize,
    pub team_page_size: usize,
    /// Header turns opaque once the page is scrolled past this offset
    pub scroll_threshold_px: f64,
    /// Locale tag used when the browser language is not supported
    pub default_locale: String,
    pub log_level: String,
    /// Prefix for relative image paths
    pub asset_base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            gallery_page_size: leptos_disclosure::DEFAULT_PAGE_SIZE,
            timeline_page_size: leptos_disclosure::DEFAULT_PAGE_SIZE,
            team_page_size: leptos_disclosure::DEFAULT_PAGE_SIZE,
            scroll_threshold_px: 50.0,
            default_locale: "en".to_string(),
            log_level: "info".to_string(),
            asset_base: "./".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn parse(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Embedded config, or defaults if it does not parse
    pub fn load() -> Self {
        Self::parse(SITE_JSON).unwrap_or_else(|e| {
            log::error!(target: "config", "{}, using defaults", e);
            Self::default()
        })
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Resolve a content image path against `asset_base`; absolute URLs pass through
    pub fn asset_url(&self, path: &str) -> String {
        crate::markdown::resolve_asset_url(&self.asset_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::parse(SITE_JSON).unwrap();
        assert_eq!(config.gallery_page_size, 6);
        assert_eq!(config.scroll_threshold_px, 50.0);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = SiteConfig::parse(r#"{ "timeline_page_size": 3 }"#).unwrap();
        assert_eq!(config.timeline_page_size, 3);
        assert_eq!(config.gallery_page_size, 6);
        assert_eq!(config.default_locale, "en");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(matches!(
            SiteConfig::parse("{ not json"),
            Err(ContentError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_log_level() {
        let mut config = SiteConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
