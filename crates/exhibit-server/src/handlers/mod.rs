//! HTTP request handlers.

pub(crate) mod navigation;
pub(crate) mod pages;

/// Convert a wildcard route capture (no leading slash) to a request path.
pub(crate) fn to_url_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}
