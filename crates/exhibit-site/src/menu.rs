//! Sidebar menu tree.
//!
//! The menu is built from sorted groups:
//! - shallow groups (e.g. `/en/examples`) contribute flat items
//! - deeper groups become collapsible submenus titled from the catalog
//!
//! API and design companion pages never appear as items; they are tabs of
//! their root page.

use serde::Serialize;

use crate::catalog::ExampleCatalog;
use crate::grouping::{Group, Groups};
use crate::icon::{Icon, IconResolver};
use crate::node::DocNode;
use crate::slug::{catalog_key, is_flat_group, is_tab_variant};

/// Link to a single page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Page slug (also the link target).
    pub key: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// True for the page being viewed.
    pub selected: bool,
}

/// Collapsible group of items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Submenu {
    /// Group key.
    pub key: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// True when the submenu is expanded.
    pub open: bool,
    pub items: Vec<MenuItem>,
}

/// Top-level menu entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MenuEntry {
    Item(MenuItem),
    Submenu(Submenu),
}

/// Sidebar menu with selection and expansion state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub entries: Vec<MenuEntry>,
    /// Slug of the selected page.
    pub selected_key: String,
    /// Keys of expanded submenus.
    pub open_keys: Vec<String>,
}

impl Menu {
    /// Build the menu for a language.
    ///
    /// `selected` is the slug of the page being viewed. Submenus whose key
    /// is a prefix of it start expanded.
    pub fn build(
        nodes: &[DocNode],
        groups: &Groups,
        catalog: &ExampleCatalog,
        icons: &dyn IconResolver,
        lang: &str,
        selected: &str,
    ) -> Self {
        let open_keys: Vec<String> = groups
            .iter()
            .map(Group::key)
            .filter(|key| selected.starts_with(key))
            .map(str::to_owned)
            .collect();

        let mut entries = Vec::new();
        for key in groups.sorted_keys(nodes, catalog, lang) {
            let Some(group) = groups.get(key) else {
                continue;
            };
            let items = menu_items(nodes, group, icons, selected);

            if is_flat_group(key) {
                entries.extend(items.into_iter().map(MenuEntry::Item));
                continue;
            }

            let catalog_key = catalog_key(key);
            let entry = catalog.get(&catalog_key);
            let icon = entry
                .and_then(|entry| entry.icon.as_deref())
                .and_then(|name| icons.resolve(name));
            let title = match entry.and_then(|entry| entry.localized_title(lang)) {
                Some(title) => title.to_owned(),
                None => {
                    tracing::debug!(group = %key, "No catalog title, using group key");
                    catalog_key
                }
            };

            entries.push(MenuEntry::Submenu(Submenu {
                key: key.to_owned(),
                title,
                icon,
                open: open_keys.iter().any(|open| open == key),
                items,
            }));
        }

        Self {
            entries,
            selected_key: selected.to_owned(),
            open_keys,
        }
    }

    /// Replace the expanded submenus.
    pub fn set_open_keys(&mut self, open_keys: Vec<String>) {
        for entry in &mut self.entries {
            if let MenuEntry::Submenu(submenu) = entry {
                submenu.open = open_keys.contains(&submenu.key);
            }
        }
        self.open_keys = open_keys;
    }

    /// All items, flattened in display order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.entries.iter().flat_map(|entry| match entry {
            MenuEntry::Item(item) => std::slice::from_ref(item).iter(),
            MenuEntry::Submenu(submenu) => submenu.items.iter(),
        })
    }
}

/// Menu items of a group: companion pages removed, stably sorted by order.
fn menu_items(
    nodes: &[DocNode],
    group: &Group,
    icons: &dyn IconResolver,
    selected: &str,
) -> Vec<MenuItem> {
    let mut members: Vec<&DocNode> = group
        .members()
        .iter()
        .filter_map(|&i| nodes.get(i))
        .filter(|node| !is_tab_variant(&node.slug))
        .collect();
    members.sort_by_key(|node| node.sort_order());

    members
        .into_iter()
        .map(|node| MenuItem {
            key: node.slug.clone(),
            title: node.title.clone(),
            icon: node.icon.as_deref().and_then(|name| icons.resolve(name)),
            selected: node.slug == selected,
        })
        .collect()
}
