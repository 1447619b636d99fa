//! Loading markdown pages into [`DocNode`]s.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use exhibit_site::DocNode;

use crate::error::ContentError;
use crate::front_matter;
use crate::markdown;
use crate::scanner::{self, SourceFile};

/// Loads every markdown page under a source directory.
///
/// File names follow `<name>[.<lang>].md`. A page named `index` stands for
/// its directory. The language suffix must be one of the configured
/// languages, otherwise the default language applies and the suffix stays
/// part of the name.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    source_dir: PathBuf,
    default_language: String,
    languages: Vec<String>,
}

impl ContentLoader {
    /// Create a loader.
    ///
    /// # Arguments
    ///
    /// * `source_dir` - Root of the markdown tree
    /// * `default_language` - Language for files without a language suffix
    /// * `languages` - Recognised language suffixes
    pub fn new(
        source_dir: impl Into<PathBuf>,
        default_language: impl Into<String>,
        languages: Vec<String>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            default_language: default_language.into(),
            languages,
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Load all pages, stably sorted by ascending `order` (missing = 0).
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read, a page has invalid
    /// or title-less front matter, or two pages produce the same slug.
    pub fn load(&self) -> Result<Vec<DocNode>, ContentError> {
        let files = scanner::scan(&self.source_dir).map_err(|source| ContentError::Io {
            path: self.source_dir.clone(),
            source,
        })?;

        let mut nodes = Vec::with_capacity(files.len());
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for file in files {
            let node = self.load_file(&file)?;
            if let Some(first) = seen.get(&node.slug) {
                return Err(ContentError::DuplicateSlug {
                    slug: node.slug,
                    first: first.clone(),
                    second: file.relative_path,
                });
            }
            seen.insert(node.slug.clone(), file.relative_path);
            nodes.push(node);
        }

        nodes.sort_by_key(DocNode::sort_order);
        tracing::info!(
            source_dir = %self.source_dir.display(),
            pages = nodes.len(),
            "Loaded content"
        );
        Ok(nodes)
    }

    fn load_file(&self, file: &SourceFile) -> Result<DocNode, ContentError> {
        let content = fs::read_to_string(&file.path).map_err(|source| ContentError::Io {
            path: file.path.clone(),
            source,
        })?;

        let (yaml, body) = front_matter::split(&content);
        let front_matter = match yaml {
            Some(yaml) => {
                front_matter::parse(yaml).map_err(|source| ContentError::FrontMatter {
                    path: file.relative_path.clone(),
                    source,
                })?
            }
            None => front_matter::FrontMatter::default(),
        };

        let Some(title) = front_matter.title.filter(|t| !t.trim().is_empty()) else {
            return Err(ContentError::MissingTitle(file.relative_path.clone()));
        };

        Ok(DocNode {
            slug: self.slug_for(file),
            title,
            icon: front_matter.icon,
            order: front_matter.order,
            html: markdown::to_html(body),
            source_path: file.relative_path.clone(),
        })
    }

    /// Build the slug `/{lang}/{dir}/{name}` for a file.
    fn slug_for(&self, file: &SourceFile) -> String {
        let (name, lang) = match file.stem.rsplit_once('.') {
            Some((name, lang)) if self.languages.iter().any(|l| l == lang) => (name, lang),
            _ => (file.stem.as_str(), self.default_language.as_str()),
        };

        let mut slug = format!("/{lang}");
        if !file.dir.is_empty() {
            slug.push('/');
            slug.push_str(&file.dir);
        }
        if name != "index" {
            slug.push('/');
            slug.push_str(name);
        }
        slug
    }
}
