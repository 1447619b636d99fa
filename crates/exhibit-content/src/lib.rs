//! Markdown content loading for Exhibit.
//!
//! Walks a docs directory, reads YAML front matter and renders markdown
//! bodies, producing the [`DocNode`](exhibit_site::DocNode) list the example
//! site is built from.

mod error;
mod front_matter;
mod loader;
mod markdown;
mod scanner;

pub use error::ContentError;
pub use loader::ContentLoader;
