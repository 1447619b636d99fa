//! Icon resolution.
//!
//! Menu entries and catalog groups name their icons (`line`, `pie`, ...).
//! An [`IconResolver`] turns a name into something the page template can
//! render. The resolver is created once at startup and shared by reference.

use serde::Serialize;

/// A renderable icon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Icon {
    /// Icon name as written in front matter or the catalog.
    pub name: String,
    /// Symbol id inside the icon sprite (e.g. `icon-line`).
    pub symbol: String,
}

/// Maps icon names to renderable icons.
pub trait IconResolver: Send + Sync {
    /// Resolve an icon by name.
    fn resolve(&self, name: &str) -> Option<Icon>;

    /// Script that registers the icon sprite, if the page must load one.
    fn script_url(&self) -> Option<&str> {
        None
    }
}

/// Icon font served as an SVG sprite script.
///
/// Every name resolves to the symbol `{prefix}{name}`; the sprite itself is
/// loaded once per page from [`IconFont::script_url`].
#[derive(Clone, Debug)]
pub struct IconFont {
    script_url: String,
    prefix: String,
}

impl IconFont {
    /// Create an icon font resolver.
    #[must_use]
    pub fn new(script_url: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            script_url: script_url.into(),
            prefix: prefix.into(),
        }
    }
}

impl IconResolver for IconFont {
    fn resolve(&self, name: &str) -> Option<Icon> {
        if name.is_empty() {
            return None;
        }
        Some(Icon {
            name: name.to_owned(),
            symbol: format!("{}{name}", self.prefix),
        })
    }

    fn script_url(&self) -> Option<&str> {
        Some(&self.script_url)
    }
}

/// Resolver used when no icon font is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIcons;

impl IconResolver for NoIcons {
    fn resolve(&self, _name: &str) -> Option<Icon> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_font_resolves_with_prefix() {
        let font = IconFont::new("//cdn.example.com/font.js", "icon-");

        let icon = font.resolve("line").unwrap();

        assert_eq!(icon.name, "line");
        assert_eq!(icon.symbol, "icon-line");
        assert_eq!(font.script_url(), Some("//cdn.example.com/font.js"));
    }

    #[test]
    fn test_icon_font_empty_name_resolves_nothing() {
        let font = IconFont::new("//cdn.example.com/font.js", "icon-");

        assert!(font.resolve("").is_none());
    }

    #[test]
    fn test_no_icons() {
        assert!(NoIcons.resolve("line").is_none());
        assert!(NoIcons.script_url().is_none());
    }
}
