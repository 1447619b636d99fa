//! Error types for content loading.

use std::path::PathBuf;

/// Error returned when loading markdown content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Reading a file or directory failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Front matter is not valid YAML or has wrongly typed fields.
    #[error("Invalid front matter in {}: {source}", path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Front matter has no `title`.
    #[error("Missing title in front matter of {}", .0.display())]
    MissingTitle(PathBuf),

    /// Two files map to the same slug.
    #[error("Duplicate slug {slug}: {} and {}", first.display(), second.display())]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}
