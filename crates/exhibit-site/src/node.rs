//! Documentation nodes supplied by the content pipeline.

use std::path::PathBuf;

use serde::Serialize;

/// A rendered documentation page.
///
/// Nodes are produced (and validated) by the content pipeline and never
/// modified afterwards. The resolver only reads them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocNode {
    /// URL path with leading slash (e.g. `/en/examples/line/basic`).
    pub slug: String,
    /// Page title from front matter.
    pub title: String,
    /// Icon name from front matter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Sort position from front matter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Pre-rendered HTML body.
    #[serde(skip)]
    pub html: String,
    /// Source file path relative to the docs directory.
    pub source_path: PathBuf,
}

impl DocNode {
    /// Effective sort position (missing order sorts as 0).
    pub fn sort_order(&self) -> i64 {
        self.order.unwrap_or(0)
    }
}

#[cfg(test)]
pub(crate) fn node(slug: &str, title: &str, order: Option<i64>) -> DocNode {
    DocNode {
        slug: slug.to_owned(),
        title: title.to_owned(),
        icon: None,
        order,
        html: format!("<p>{title}</p>"),
        source_path: PathBuf::from(format!("{}.md", slug.trim_start_matches('/'))),
    }
}
