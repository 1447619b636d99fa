//! Example page tabs.
//!
//! Every example page has up to three tabs backed by sibling nodes:
//!
//! | Tab      | Slug               |
//! |----------|--------------------|
//! | Examples | `{root}`           |
//! | API      | `{root}/API`       |
//! | Design   | `{root}/design`    |
//!
//! The tab a request opens is derived from its path suffix.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::locale::{Locale, Message};
use crate::node::DocNode;
use crate::slug::{API_MARKER, DESIGN_MARKER};

static API_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/examples/.*/API$").expect("invalid API path regex"));
static DESIGN_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/examples/.*/design$").expect("invalid design path regex"));

/// Tab of an example page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Tab {
    #[default]
    #[serde(rename = "examples")]
    Examples,
    #[serde(rename = "API")]
    Api,
    #[serde(rename = "design")]
    Design,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 3] = [Tab::Examples, Tab::Api, Tab::Design];

    /// Tab opened by a request path.
    ///
    /// # Examples
    ///
    /// ```
    /// use exhibit_site::Tab;
    ///
    /// assert_eq!(Tab::from_request("/en/examples/line/basic/API"), Tab::Api);
    /// assert_eq!(Tab::from_request("/en/examples/line/basic"), Tab::Examples);
    /// ```
    pub fn from_request(path: &str) -> Self {
        if API_PATH.is_match(path) {
            Self::Api
        } else if DESIGN_PATH.is_match(path) {
            Self::Design
        } else {
            Self::Examples
        }
    }

    /// Slug marker segment of this tab (`None` for the examples tab).
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Self::Examples => None,
            Self::Api => Some(API_MARKER),
            Self::Design => Some(DESIGN_MARKER),
        }
    }

    /// Slug of this tab's page for a root slug.
    pub fn slug(self, root_slug: &str) -> String {
        match self.marker() {
            Some(marker) => format!("{root_slug}/{marker}"),
            None => root_slug.to_owned(),
        }
    }

    /// Localized tab label.
    pub fn label(self, locale: Locale) -> &'static str {
        locale.text(match self {
            Self::Examples => Message::ExamplesTab,
            Self::Api => Message::ApiTab,
            Self::Design => Message::DesignTab,
        })
    }

    /// Stable identifier used in HTML ids.
    pub fn id(self) -> &'static str {
        match self {
            Self::Examples => "examples",
            Self::Api => "api",
            Self::Design => "design",
        }
    }
}

/// Nodes backing the tabs of one example page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExampleSections<'a> {
    pub examples: Option<&'a DocNode>,
    pub api: Option<&'a DocNode>,
    pub design: Option<&'a DocNode>,
}

impl<'a> ExampleSections<'a> {
    /// Collect the tab nodes for a root slug.
    pub fn collect(nodes: &'a [DocNode], root_slug: &str) -> Self {
        let find = |tab: Tab| {
            let slug = tab.slug(root_slug);
            nodes.iter().find(|node| node.slug == slug)
        };
        Self {
            examples: find(Tab::Examples),
            api: find(Tab::Api),
            design: find(Tab::Design),
        }
    }

    /// Node for a tab.
    pub fn get(&self, tab: Tab) -> Option<&'a DocNode> {
        match tab {
            Tab::Examples => self.examples,
            Tab::Api => self.api,
            Tab::Design => self.design,
        }
    }

    /// Existing tabs with their nodes, in display order.
    pub fn present(&self) -> impl Iterator<Item = (Tab, &'a DocNode)> {
        let sections = *self;
        Tab::ALL
            .into_iter()
            .filter_map(move |tab| sections.get(tab).map(|node| (tab, node)))
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_none() && self.api.is_none() && self.design.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::node;

    #[test]
    fn test_from_request_api() {
        assert_eq!(Tab::from_request("/en/examples/charts/line/API"), Tab::Api);
    }

    #[test]
    fn test_from_request_design() {
        assert_eq!(Tab::from_request("/zh/examples/charts/line/design"), Tab::Design);
    }

    #[test]
    fn test_from_request_requires_examples_segment() {
        assert_eq!(Tab::from_request("/en/docs/API"), Tab::Examples);
        assert_eq!(Tab::from_request("/en/examples/API"), Tab::Examples);
    }

    #[test]
    fn test_from_request_marker_must_be_last() {
        assert_eq!(Tab::from_request("/en/examples/API/basic"), Tab::Examples);
    }

    #[test]
    fn test_tab_slug() {
        assert_eq!(Tab::Examples.slug("/en/examples/a"), "/en/examples/a");
        assert_eq!(Tab::Api.slug("/en/examples/a"), "/en/examples/a/API");
        assert_eq!(Tab::Design.slug("/en/examples/a"), "/en/examples/a/design");
    }

    #[test]
    fn test_tab_serializes_as_marker_names() {
        assert_eq!(serde_json::to_value(Tab::Api).unwrap(), "API");
        assert_eq!(serde_json::to_value(Tab::Examples).unwrap(), "examples");
    }

    #[test]
    fn test_collect_sections() {
        let nodes = vec![
            node("/en/examples/a", "A", None),
            node("/en/examples/a/API", "A API", None),
            node("/en/examples/b/design", "B Design", None),
        ];

        let sections = ExampleSections::collect(&nodes, "/en/examples/a");

        assert_eq!(sections.examples.map(|n| n.title.as_str()), Some("A"));
        assert_eq!(sections.api.map(|n| n.title.as_str()), Some("A API"));
        assert!(sections.design.is_none());
        let tabs: Vec<Tab> = sections.present().map(|(tab, _)| tab).collect();
        assert_eq!(tabs, vec![Tab::Examples, Tab::Api]);
    }

    #[test]
    fn test_collect_sections_unknown_root_is_empty() {
        let nodes = vec![node("/en/examples/a", "A", None)];

        let sections = ExampleSections::collect(&nodes, "/en/examples/zzz");

        assert!(sections.is_empty());
    }
}
