//! Error types

use thiserror::Error;

use crate::content::Locale;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content document for locale `{locale}` is invalid: {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    #[error("site config is invalid: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
