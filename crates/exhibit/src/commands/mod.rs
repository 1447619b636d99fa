//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod nav;
pub(crate) mod serve;

use std::sync::Arc;

use exhibit_build::PageChrome;
use exhibit_config::Config;
use exhibit_content::ContentLoader;
use exhibit_site::{
    CatalogEntry, ExampleCatalog, ExampleSite, IconFont, IconResolver, NoIcons, Repository,
};

pub(crate) use build::BuildArgs;
pub(crate) use nav::NavArgs;
pub(crate) use serve::ServeArgs;

use crate::error::CliError;

/// Load content and assemble the example site described by `config`.
pub(crate) fn load_site(config: &Config) -> Result<ExampleSite, CliError> {
    let loader = ContentLoader::new(
        &config.docs_resolved.source_dir,
        config.site.default_language.as_str(),
        config.site.languages.clone(),
    );
    let nodes = loader.load()?;

    let mut site = ExampleSite::new(nodes, catalog(config)).with_icons(icons(config));
    if let Some(url) = &config.site.repository_url {
        site = site.with_repository(Repository {
            url: url.clone(),
            branch: config.site.branch.clone(),
        });
    }

    Ok(site)
}

/// Site-wide page parts from configuration.
pub(crate) fn chrome(config: &Config) -> PageChrome {
    PageChrome::new(config.site.title.as_str())
}

fn catalog(config: &Config) -> ExampleCatalog {
    ExampleCatalog::new(
        config
            .examples
            .iter()
            .map(|example| CatalogEntry {
                slug: example.slug.clone(),
                icon: example.icon.clone(),
                title: example.title.clone(),
            })
            .collect(),
    )
}

fn icons(config: &Config) -> Arc<dyn IconResolver> {
    match &config.icons.script_url {
        Some(url) => Arc::new(IconFont::new(url.as_str(), config.icons.prefix.as_str())),
        None => Arc::new(NoIcons),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn create_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "exhibit.toml",
            r#"
[site]
title = "G2"
repository_url = "https://github.com/antvis/g2"
languages = ["en", "zh"]

[icons]
script_url = "//cdn/font.js"

[[examples]]
slug = "examples/line"
icon = "line"
title = { en = "Line Charts", zh = "折线图" }
"#,
        );
        write(
            temp.path(),
            "docs/examples/line/basic/index.en.md",
            "---\ntitle: Basic\norder: 1\n---\n\nA line chart.\n",
        );
        write(
            temp.path(),
            "docs/examples/line/basic/API.en.md",
            "---\ntitle: Basic API\n---\n\n| option | type |\n|---|---|\n| x | string |\n",
        );
        write(
            temp.path(),
            "docs/examples/line/basic/index.zh.md",
            "---\ntitle: 基础折线图\n---\n",
        );
        temp
    }

    fn load_config(temp: &TempDir) -> Config {
        Config::load(Some(&temp.path().join("exhibit.toml")), None).unwrap()
    }

    #[test]
    fn test_load_site_from_config() {
        let temp = create_project();
        let config = load_config(&temp);

        let site = load_site(&config).unwrap();

        assert_eq!(site.nodes().len(), 3);
        let page = site.page("/zh/examples/line/basic").unwrap();
        assert_eq!(page.title, "基础折线图");
        assert_eq!(page.icon_script.as_deref(), Some("//cdn/font.js"));
        assert_eq!(
            page.edit_url.as_deref(),
            Some("https://github.com/antvis/g2/edit/master/examples/line/basic/index.zh.md")
        );
    }

    #[test]
    fn test_load_site_uses_catalog() {
        let temp = create_project();
        let config = load_config(&temp);

        let site = load_site(&config).unwrap();

        let menu = site.menu("en", "/en/examples/line/basic");
        let exhibit_site::MenuEntry::Submenu(submenu) = &menu.entries[0] else {
            panic!("expected submenu");
        };
        assert_eq!(submenu.title, "Line Charts");
        assert_eq!(
            submenu.icon.as_ref().map(|icon| icon.symbol.as_str()),
            Some("icon-line")
        );
    }

    #[test]
    fn test_load_site_missing_source_dir() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "exhibit.toml", "[docs]\nsource_dir = \"missing\"\n");
        let config = load_config(&temp);

        let result = load_site(&config);

        assert!(matches!(result, Err(CliError::Content(_))));
    }

    #[test]
    fn test_chrome_uses_site_title() {
        let temp = create_project();
        let config = load_config(&temp);

        assert_eq!(chrome(&config).site_title, "G2");
    }
}
