//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use exhibit_build::PageChrome;
use exhibit_site::ExampleSite;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Resolved example site.
    pub(crate) site: Arc<ExampleSite>,
    /// Site-wide page parts.
    pub(crate) chrome: PageChrome,
    /// Languages content is written in.
    pub(crate) languages: Vec<String>,
    /// Language used for `/` and unknown paths.
    pub(crate) default_language: String,
}

impl AppState {
    /// Language of a request path, falling back to the default language.
    pub(crate) fn language_of<'a>(&'a self, path: &'a str) -> &'a str {
        exhibit_site::slug::language(path)
            .filter(|lang| self.languages.iter().any(|l| l == lang))
            .unwrap_or(&self.default_language)
    }
}
