//! Application Context
//!
//! Shared content and config provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::models::PortfolioContent;

/// App-wide content signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Content document for the active locale
    pub content: Memo<PortfolioContent>,
    /// Set when the active locale's document failed to load
    pub load_error: Signal<Option<String>>,
    config: StoredValue<SiteConfig>,
}

impl AppContext {
    pub fn new(
        content: Memo<PortfolioContent>,
        load_error: Signal<Option<String>>,
        config: SiteConfig,
    ) -> Self {
        Self {
            content,
            load_error,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    pub fn asset_url(&self, path: &str) -> String {
        self.config.with_value(|c| c.asset_url(path))
    }

    pub fn asset_base(&self) -> String {
        self.config.with_value(|c| c.asset_base.clone())
    }

    /// Memo over one part of the content; only notifies when that part changes
    pub fn select<T>(&self, f: impl Fn(&PortfolioContent) -> T + Send + Sync + 'static) -> Memo<T>
    where
        T: PartialEq + Send + Sync + 'static,
    {
        let content = self.content;
        Memo::new(move |_| content.with(|c| f(c)))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
