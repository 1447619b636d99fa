//! Markdown file discovery by filesystem walking.
//!
//! The scanner only finds files; reading and parsing happen in
//! [`ContentLoader`](crate::ContentLoader).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A markdown file found under the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceFile {
    /// Absolute (or source-dir-joined) path used for reading.
    pub path: PathBuf,
    /// Path relative to the source directory.
    pub relative_path: PathBuf,
    /// Directory part of the URL, `/`-separated (e.g. "examples/line/basic").
    pub dir: String,
    /// File name without the `.md` extension (e.g. "API.en").
    pub stem: String,
}

/// Walk `source_dir` and collect markdown files.
///
/// Hidden files and directories are skipped. Entries are visited in name
/// order so the result is deterministic across platforms.
pub(crate) fn scan(source_dir: &Path) -> io::Result<Vec<SourceFile>> {
    let mut files = Vec::new();
    scan_directory(source_dir, Path::new(""), &mut files)?;
    Ok(files)
}

fn scan_directory(dir_path: &Path, relative: &Path, files: &mut Vec<SourceFile>) -> io::Result<()> {
    let mut entries = fs::read_dir(dir_path)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        let relative_path = relative.join(&*name);

        if entry.file_type()?.is_dir() {
            scan_directory(&path, &relative_path, files)?;
        } else if let Some(stem) = name.strip_suffix(".md") {
            files.push(SourceFile {
                dir: url_dir(relative),
                stem: stem.to_owned(),
                path,
                relative_path,
            });
        }
    }

    Ok(())
}

/// Join path components with `/` regardless of platform.
fn url_dir(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
