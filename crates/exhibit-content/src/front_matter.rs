//! YAML front matter.
//!
//! A page may start with a YAML block fenced by `---` lines:
//!
//! ```markdown
//! ---
//! title: Basic Line
//! icon: line
//! order: 1
//! ---
//!
//! Body text.
//! ```

use serde::Deserialize;

/// Fields read from a page's front matter.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct FrontMatter {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i64>,
}

/// Split a document into its front matter YAML and markdown body.
///
/// Returns `None` for the YAML part when the document has no front matter
/// (or the opening fence is never closed).
pub(crate) fn split(content: &str) -> (Option<&str>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    (None, content)
}

/// Parse front matter YAML.
///
/// Empty YAML yields default (all-`None`) fields.
pub(crate) fn parse(yaml: &str) -> Result<FrontMatter, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(yaml)
}
