//! Example gallery navigation for Exhibit.
//!
//! This crate provides:
//! - [`ExampleSite`]: page resolution and page assembly for example pages
//! - [`Menu`]: grouped, ordered sidebar menu built from page slugs
//! - [`ExampleSections`]: the Examples / API / Design tab bundle of a page
//!
//! # Quick Start
//!
//! ```
//! use std::path::PathBuf;
//! use exhibit_site::{DocNode, ExampleCatalog, ExampleSite, Tab};
//!
//! let nodes = vec![
//!     DocNode {
//!         slug: "/en/examples/line/basic".to_owned(),
//!         title: "Basic Line".to_owned(),
//!         icon: None,
//!         order: Some(1),
//!         html: "<p>A line chart.</p>".to_owned(),
//!         source_path: PathBuf::from("examples/line/basic/index.en.md"),
//!     },
//!     DocNode {
//!         slug: "/en/examples/line/basic/API".to_owned(),
//!         title: "Basic Line API".to_owned(),
//!         icon: None,
//!         order: None,
//!         html: "<p>Options.</p>".to_owned(),
//!         source_path: PathBuf::from("examples/line/basic/API.en.md"),
//!     },
//! ];
//! let site = ExampleSite::new(nodes, ExampleCatalog::default());
//!
//! let page = site.page("/en/examples/line/basic/API")?;
//! assert_eq!(page.active_tab, Tab::Api);
//! assert_eq!(page.root_slug, "/en/examples/line/basic");
//! # Ok::<(), exhibit_site::SiteError>(())
//! ```

mod catalog;
mod grouping;
mod icon;
mod locale;
mod menu;
mod node;
mod site;
pub mod slug;
mod tabs;

pub use catalog::{CatalogEntry, ExampleCatalog};
pub use grouping::{CATALOG_ORDER_OFFSET, Group, Groups};
pub use icon::{Icon, IconFont, IconResolver, NoIcons};
pub use locale::{Locale, Message};
pub use menu::{Menu, MenuEntry, MenuItem, Submenu};
pub use node::DocNode;
pub use site::{ExamplePage, ExampleSite, Repository, Resolution, SiteError, TabPanel};
pub use tabs::{ExampleSections, Tab};
