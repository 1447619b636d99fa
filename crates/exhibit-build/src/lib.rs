//! HTML rendering and static site generation for Exhibit.

mod builder;
mod template;

pub use builder::{BuildError, BuildStats, StaticSiteBuilder};
pub use template::{PageChrome, render_not_found, render_page};
