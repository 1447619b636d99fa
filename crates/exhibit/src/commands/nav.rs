//! `exhibit nav` command implementation.

use std::path::PathBuf;

use clap::Args;
use exhibit_config::{CliSettings, Config};
use exhibit_site::ExampleSite;

use super::load_site;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Request path of the page, e.g. `/en/examples/line/basic/API`.
    path: String,

    /// Path to configuration file (default: auto-discover exhibit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl NavArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let site = load_site(&config)?;

        let json = navigation_json(&site, &self.path)?;
        Output::new().data(&json)?;
        Ok(())
    }
}

/// Pretty JSON of the page a path resolves to, menu included.
fn navigation_json(site: &ExampleSite, path: &str) -> Result<String, CliError> {
    let page = site.page(path)?;
    Ok(serde_json::to_string_pretty(&page)?)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use exhibit_site::{DocNode, ExampleCatalog};

    use super::*;

    fn create_site() -> ExampleSite {
        let node = |slug: &str, title: &str| DocNode {
            slug: slug.to_owned(),
            title: title.to_owned(),
            icon: None,
            order: None,
            html: String::new(),
            source_path: PathBuf::from("page.md"),
        };
        ExampleSite::new(
            vec![
                node("/en/examples/line/basic", "Basic"),
                node("/en/examples/line/basic/design", "Basic Design"),
            ],
            ExampleCatalog::default(),
        )
    }

    #[test]
    fn test_navigation_json() {
        let json = navigation_json(&create_site(), "/en/examples/line/basic/design").unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["activeTab"], "design");
        assert_eq!(value["rootSlug"], "/en/examples/line/basic");
        assert_eq!(value["menu"]["selectedKey"], "/en/examples/line/basic");
        assert_eq!(value["tabs"][1]["active"], true);
    }

    #[test]
    fn test_navigation_json_unknown_path() {
        let result = navigation_json(&create_site(), "/en/examples/none");

        assert!(matches!(result, Err(CliError::Site(_))));
    }
}
