//! Example gallery site.
//!
//! [`ExampleSite`] owns the example nodes together with their precomputed
//! grouping and answers the three questions a page render asks:
//!
//! 1. Which node does this request path show, and on which tab? ([`ExampleSite::resolve`])
//! 2. What does the sidebar look like? ([`ExampleSite::menu`])
//! 3. Everything the template needs in one value ([`ExampleSite::page`])
//!
//! The site is immutable after construction and `Send + Sync`, so it can be
//! shared through an `Arc` by the server.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::ExampleCatalog;
use crate::grouping::Groups;
use crate::icon::{IconResolver, NoIcons};
use crate::locale::{Locale, Message};
use crate::menu::Menu;
use crate::node::DocNode;
use crate::slug::{self, is_contained_in, is_suffix_of, strip_tab_marker};
use crate::tabs::{ExampleSections, Tab};

/// Error returned when a page cannot be resolved.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No example node matches the request path.
    #[error("No example page matches {0}")]
    LookupFailure(String),
}

/// Source repository used to build "edit this page" links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repository {
    /// Repository web URL (e.g. `https://github.com/antvis/g2`).
    pub url: String,
    /// Branch that edits are made against.
    pub branch: String,
}

impl Repository {
    /// Edit URL for a file relative to the docs directory.
    pub fn edit_url(&self, source_path: &Path) -> String {
        let path = source_path.to_string_lossy().replace('\\', "/");
        format!(
            "{}/edit/{}/{}",
            self.url.trim_end_matches('/'),
            self.branch,
            path.trim_start_matches('/')
        )
    }
}

/// Result of resolving a request path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Node whose content and title the page shows.
    pub node: &'a DocNode,
    /// Tab opened by the request.
    pub tab: Tab,
    /// Slug of the example page the tabs belong to.
    pub root_slug: &'a str,
}

/// One tab of a rendered example page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TabPanel {
    pub tab: Tab,
    /// Localized label.
    pub label: String,
    /// Link to the page that opens this tab.
    pub href: String,
    /// Node HTML, injected verbatim. Empty for the examples tab, whose
    /// content is the page body.
    #[serde(skip)]
    pub html: String,
    /// Only the active panel is visible; the others stay in the page hidden.
    pub active: bool,
}

/// Everything needed to render one example page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamplePage {
    pub lang: String,
    pub title: String,
    /// Slug of the resolved node.
    pub slug: String,
    pub root_slug: String,
    pub active_tab: Tab,
    pub menu: Menu,
    /// Resolved node HTML, shown above the tab bar on every tab.
    #[serde(skip)]
    pub body: String,
    pub tabs: Vec<TabPanel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    /// Localized tooltip for the edit link.
    pub edit_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_script: Option<String>,
}

/// Example gallery navigation and page resolution.
pub struct ExampleSite {
    nodes: Vec<DocNode>,
    groups: Groups,
    catalog: ExampleCatalog,
    icons: Arc<dyn IconResolver>,
    repository: Option<Repository>,
}

impl ExampleSite {
    /// Create a site from content-pipeline nodes.
    ///
    /// Nodes outside the example gallery (slugs without an `/examples/`
    /// segment) are ignored. The remaining nodes keep their input order,
    /// which is expected to be ascending by `order`.
    #[must_use]
    pub fn new(nodes: Vec<DocNode>, catalog: ExampleCatalog) -> Self {
        let nodes: Vec<DocNode> = nodes
            .into_iter()
            .filter(|node| slug::is_example(&node.slug))
            .collect();
        let groups = Groups::build(&nodes);
        tracing::debug!(nodes = nodes.len(), groups = groups.len(), "Built example site");

        Self {
            nodes,
            groups,
            catalog,
            icons: Arc::new(NoIcons),
            repository: None,
        }
    }

    /// Use an icon resolver for menu icons.
    #[must_use]
    pub fn with_icons(mut self, icons: Arc<dyn IconResolver>) -> Self {
        self.icons = icons;
        self
    }

    /// Enable edit links pointing at a repository.
    #[must_use]
    pub fn with_repository(mut self, repository: Repository) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Example nodes in source order.
    pub fn nodes(&self) -> &[DocNode] {
        &self.nodes
    }

    pub fn groups(&self) -> &Groups {
        &self.groups
    }

    pub fn catalog(&self) -> &ExampleCatalog {
        &self.catalog
    }

    pub fn icons(&self) -> &dyn IconResolver {
        self.icons.as_ref()
    }

    /// Resolve a request path to a node and tab.
    ///
    /// API and design requests select a node whose slug is a path prefix of
    /// the request, preferring the tab's root page. Other requests select the
    /// first node whose slug equals the path or is a suffix of it.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::LookupFailure`] if no node matches.
    pub fn resolve(&self, path: &str) -> Result<Resolution<'_>, SiteError> {
        let path = normalize_path(path);
        let tab = Tab::from_request(path);

        let node = match tab {
            Tab::Examples => self
                .nodes
                .iter()
                .find(|node| is_suffix_of(&node.slug, path)),
            Tab::Api | Tab::Design => {
                let root_path = strip_tab_marker(path);
                self.nodes
                    .iter()
                    .find(|node| is_suffix_of(&node.slug, root_path))
                    .or_else(|| {
                        self.nodes
                            .iter()
                            .find(|node| is_contained_in(&node.slug, path))
                    })
            }
        };

        let Some(node) = node else {
            tracing::debug!(path, "No example page matches request");
            return Err(SiteError::LookupFailure(path.to_owned()));
        };

        // Only API and design requests address a sub-page of the root.
        let root_slug = if tab.marker().is_some() {
            strip_tab_marker(&node.slug)
        } else {
            node.slug.as_str()
        };

        Ok(Resolution {
            node,
            tab,
            root_slug,
        })
    }

    /// Build the sidebar menu for a language with `selected` highlighted.
    pub fn menu(&self, lang: &str, selected: &str) -> Menu {
        Menu::build(
            &self.nodes,
            &self.groups,
            &self.catalog,
            self.icons.as_ref(),
            lang,
            selected,
        )
    }

    /// Tab nodes for a root slug.
    pub fn sections(&self, root_slug: &str) -> ExampleSections<'_> {
        ExampleSections::collect(&self.nodes, root_slug)
    }

    /// Slug of the first menu item for a language.
    pub fn first_page(&self, lang: &str) -> Option<String> {
        self.menu(lang, "").items().next().map(|item| item.key.clone())
    }

    /// Assemble the page for a request path.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::LookupFailure`] if no node matches.
    pub fn page(&self, path: &str) -> Result<ExamplePage, SiteError> {
        let resolution = self.resolve(path)?;
        let node = resolution.node;
        let lang = slug::language(&node.slug).unwrap_or_default().to_owned();
        let locale = Locale::new(&lang);

        let tabs = self
            .sections(resolution.root_slug)
            .present()
            .map(|(tab, tab_node)| TabPanel {
                tab,
                label: tab.label(locale).to_owned(),
                href: tab.slug(resolution.root_slug),
                html: match tab {
                    Tab::Examples => String::new(),
                    Tab::Api | Tab::Design => tab_node.html.clone(),
                },
                active: tab == resolution.tab,
            })
            .collect();

        Ok(ExamplePage {
            title: node.title.clone(),
            slug: node.slug.clone(),
            root_slug: resolution.root_slug.to_owned(),
            active_tab: resolution.tab,
            menu: self.menu(&lang, &node.slug),
            body: node.html.clone(),
            tabs,
            edit_url: self
                .repository
                .as_ref()
                .map(|repo| repo.edit_url(&node.source_path)),
            edit_label: locale.text(Message::EditOnRepository).to_owned(),
            icon_script: self.icons.script_url().map(str::to_owned),
            lang,
        })
    }
}

/// Drop a trailing slash (except for the root path).
fn normalize_path(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}
