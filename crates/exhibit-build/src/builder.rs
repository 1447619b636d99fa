//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};

use exhibit_site::{ExampleSite, SiteError};

use crate::template::{self, PageChrome};

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Site(#[from] SiteError),
}

/// Summary of a finished build.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    /// Example pages written (tab pages included).
    pub pages: usize,
    /// Bytes of HTML written, redirect and not-found pages included.
    pub bytes: usize,
}

/// Renders every example page of a site to HTML files.
///
/// Each node is written to `{output_dir}{slug}/index.html`. The output also
/// gets a `404.html` and a root `index.html` redirecting to the first page
/// of the default language.
pub struct StaticSiteBuilder<'a> {
    site: &'a ExampleSite,
    chrome: &'a PageChrome,
    default_language: String,
}

impl<'a> StaticSiteBuilder<'a> {
    pub fn new(
        site: &'a ExampleSite,
        chrome: &'a PageChrome,
        default_language: impl Into<String>,
    ) -> Self {
        Self {
            site,
            chrome,
            default_language: default_language.into(),
        }
    }

    /// Render all pages into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if a node does not resolve to its own page or a file
    /// cannot be written.
    pub fn build(&self, output_dir: &Path) -> Result<BuildStats, BuildError> {
        let mut stats = BuildStats::default();

        for node in self.site.nodes() {
            let page = self.site.page(&node.slug)?;
            let html = template::render_page(&page, self.chrome);
            let dir = output_dir.join(node.slug.trim_start_matches('/'));
            write_file(&dir.join("index.html"), &html)?;
            stats.pages += 1;
            stats.bytes += html.len();
        }

        let not_found = template::render_not_found(&self.default_language, "", self.chrome);
        write_file(&output_dir.join("404.html"), &not_found)?;
        stats.bytes += not_found.len();

        if let Some(first) = self.site.first_page(&self.default_language) {
            let redirect = redirect_page(&first);
            write_file(&output_dir.join("index.html"), &redirect)?;
            stats.bytes += redirect.len();
        } else {
            tracing::warn!(lang = %self.default_language, "No pages for default language, skipping index.html");
        }

        tracing::info!(
            output_dir = %output_dir.display(),
            pages = stats.pages,
            bytes = stats.bytes,
            "Static site built"
        );
        Ok(stats)
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
    let io_err = |source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, content).map_err(io_err)
}

fn redirect_page(target: &str) -> String {
    let target = template::escape(target);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <meta http-equiv=\"refresh\" content=\"0; url={target}\">\n\
         <link rel=\"canonical\" href=\"{target}\">\n</head>\n\
         <body><a href=\"{target}\">{target}</a></body>\n</html>"
    )
}
