//! Example catalog.
//!
//! The catalog is the site-level, ordered list of example categories. It
//! supplies display titles and icons for menu groups that have no page of
//! their own, and pins the position of those groups in the menu.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Metadata for one example category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Catalog key, e.g. `examples/line`.
    pub slug: String,
    /// Icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Localized titles keyed by language.
    #[serde(default)]
    pub title: HashMap<String, String>,
}

impl CatalogEntry {
    /// Title for a language, if one is configured.
    pub fn localized_title(&self, lang: &str) -> Option<&str> {
        self.title.get(lang).map(String::as_str)
    }
}

/// Ordered list of catalog entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExampleCatalog {
    entries: Vec<CatalogEntry>,
}

impl ExampleCatalog {
    /// Create a catalog from entries in display order.
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Position of the entry with the given catalog key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.slug == key)
    }

    /// Entry with the given catalog key.
    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.slug == key)
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
