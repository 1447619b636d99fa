//! Slug helpers.
//!
//! Slugs are URL paths with a leading slash and `/`-separated segments,
//! e.g. `/en/examples/line/basic`. Example pages may have two companion pages
//! whose slugs end with a marker segment:
//!
//! - `/en/examples/line/basic/API` - API reference tab
//! - `/en/examples/line/basic/design` - design guide tab
//!
//! Everything here is a pure function over string slices.

/// Segment that starts the catalog-relevant part of a slug.
pub const EXAMPLES_SEGMENT: &str = "examples";

/// Marker segment of API tab pages.
pub const API_MARKER: &str = "API";

/// Marker segment of design tab pages.
pub const DESIGN_MARKER: &str = "design";

/// Group keys with at most this many `/`-separated pieces are rendered flat.
///
/// The leading empty piece counts, so `/en/examples` has three pieces.
const FLAT_GROUP_PIECES: usize = 3;

/// Check if a slug belongs to the example gallery.
pub fn is_example(slug: &str) -> bool {
    slug.contains("/examples/")
}

/// Check if a slug is an API or design companion page.
pub fn is_tab_variant(slug: &str) -> bool {
    tab_marker(slug).is_some()
}

/// Return the marker segment a slug ends with, if any.
pub(crate) fn tab_marker(slug: &str) -> Option<&'static str> {
    let (_, last) = slug.rsplit_once('/')?;
    match last {
        API_MARKER => Some(API_MARKER),
        DESIGN_MARKER => Some(DESIGN_MARKER),
        _ => None,
    }
}

/// Strip a trailing `/API` or `/design` segment.
///
/// Slugs without a marker are returned unchanged.
///
/// # Examples
///
/// ```
/// use exhibit_site::slug::strip_tab_marker;
///
/// assert_eq!(strip_tab_marker("/en/examples/line/basic/API"), "/en/examples/line/basic");
/// assert_eq!(strip_tab_marker("/en/examples/line/basic"), "/en/examples/line/basic");
/// ```
pub fn strip_tab_marker(slug: &str) -> &str {
    match tab_marker(slug) {
        Some(marker) => &slug[..slug.len() - marker.len() - 1],
        None => slug,
    }
}

/// Compute the menu group key for a slug.
///
/// Companion pages drop their last two segments so they group together with
/// the sibling root page. All other pages drop their last segment.
///
/// # Examples
///
/// ```
/// use exhibit_site::slug::group_key;
///
/// assert_eq!(group_key("/en/examples/line/basic"), "/en/examples/line");
/// assert_eq!(group_key("/en/examples/line/basic/API"), "/en/examples/line");
/// ```
pub fn group_key(slug: &str) -> String {
    let pieces: Vec<&str> = slug.split('/').collect();
    let strip = if is_tab_variant(slug) { 2 } else { 1 };
    pieces[..pieces.len().saturating_sub(strip)].join("/")
}

/// Reduce a group key to its catalog form.
///
/// Keeps the path from the `examples` segment onward and drops empty
/// segments. Keys without an `examples` segment keep only their last segment.
///
/// # Examples
///
/// ```
/// use exhibit_site::slug::catalog_key;
///
/// assert_eq!(catalog_key("/en/examples/line"), "examples/line");
/// assert_eq!(catalog_key("/en/docs"), "docs");
/// ```
pub fn catalog_key(group_key: &str) -> String {
    let pieces: Vec<&str> = group_key.split('/').collect();
    let start = pieces
        .iter()
        .position(|piece| *piece == EXAMPLES_SEGMENT)
        .unwrap_or(pieces.len().saturating_sub(1));
    pieces[start..]
        .iter()
        .filter(|piece| !piece.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/")
}

/// Check if a group key renders as flat menu items rather than a submenu.
pub fn is_flat_group(group_key: &str) -> bool {
    group_key.split('/').count() <= FLAT_GROUP_PIECES
}

/// Return the language segment of a slug (its first non-empty segment).
pub fn language(slug: &str) -> Option<&str> {
    slug.split('/').find(|segment| !segment.is_empty())
}

/// Check if `slug` equals `path` or is a segment-aligned suffix of it.
///
/// Suffix matching lets pages resolve behind a deployment path prefix
/// (`/G2/en/examples/line/basic` still matches `/en/examples/line/basic`).
pub(crate) fn is_suffix_of(slug: &str, path: &str) -> bool {
    if slug.is_empty() {
        return false;
    }
    path == slug || (path.ends_with(slug) && slug.starts_with('/'))
}

/// Check if `slug` occurs in `path` followed by a segment boundary.
pub(crate) fn is_contained_in(slug: &str, path: &str) -> bool {
    if slug.is_empty() {
        return false;
    }
    path.match_indices(slug).any(|(idx, _)| {
        let rest = &path[idx + slug.len()..];
        rest.is_empty() || rest.starts_with('/')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_example() {
        assert!(is_example("/en/examples/line/basic"));
        assert!(!is_example("/en/docs/manual"));
        assert!(!is_example("/en/examples"));
    }

    #[test]
    fn test_tab_marker() {
        assert_eq!(tab_marker("/en/examples/line/basic/API"), Some("API"));
        assert_eq!(tab_marker("/en/examples/line/basic/design"), Some("design"));
        assert_eq!(tab_marker("/en/examples/line/basic"), None);
        assert_eq!(tab_marker("/en/examples/line/basic/api"), None);
        assert_eq!(tab_marker("/en/examples/line/basicAPI"), None);
    }

    #[test]
    fn test_strip_tab_marker_design() {
        assert_eq!(
            strip_tab_marker("/en/examples/line/basic/design"),
            "/en/examples/line/basic"
        );
    }

    #[test]
    fn test_group_key_root_page() {
        assert_eq!(group_key("/en/examples/line/basic"), "/en/examples/line");
    }

    #[test]
    fn test_group_key_api_and_design_share_root_group() {
        let root = group_key("/en/examples/line/basic");
        assert_eq!(group_key("/en/examples/line/basic/API"), root);
        assert_eq!(group_key("/en/examples/line/basic/design"), root);
    }

    #[test]
    fn test_group_key_shallow_page() {
        assert_eq!(group_key("/en/examples/gallery"), "/en/examples");
    }

    #[test]
    fn test_group_key_single_segment() {
        assert_eq!(group_key("/en"), "");
        assert_eq!(group_key(""), "");
    }

    #[test]
    fn test_catalog_key_drops_language_prefix() {
        assert_eq!(catalog_key("/zh/examples/pie/basic"), "examples/pie/basic");
    }

    #[test]
    fn test_catalog_key_examples_root() {
        assert_eq!(catalog_key("/en/examples"), "examples");
    }

    #[test]
    fn test_catalog_key_without_examples_segment() {
        assert_eq!(catalog_key("/en/docs/api"), "api");
        assert_eq!(catalog_key(""), "");
    }

    #[test]
    fn test_is_flat_group() {
        assert!(is_flat_group("/en/examples"));
        assert!(is_flat_group("/en"));
        assert!(!is_flat_group("/en/examples/line"));
    }

    #[test]
    fn test_language() {
        assert_eq!(language("/zh/examples/line"), Some("zh"));
        assert_eq!(language("/"), None);
    }

    #[test]
    fn test_is_suffix_of() {
        assert!(is_suffix_of("/en/examples/a", "/en/examples/a"));
        assert!(is_suffix_of("/en/examples/a", "/G2/en/examples/a"));
        assert!(!is_suffix_of("/en/examples/a", "/en/examples/a/API"));
        assert!(!is_suffix_of("", "/en/examples/a"));
    }

    #[test]
    fn test_is_contained_in_respects_segment_boundary() {
        assert!(is_contained_in("/en/examples/a", "/en/examples/a/API"));
        assert!(is_contained_in("/en/examples/a/API", "/en/examples/a/API"));
        assert!(!is_contained_in("/en/examples/a", "/en/examples/ab/API"));
    }
}
