//! `exhibit build` command implementation.

use std::path::PathBuf;

use clap::Args;
use exhibit_build::StaticSiteBuilder;
use exhibit_config::{CliSettings, Config};

use super::{chrome, load_site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover exhibit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let output_dir = &config.docs_resolved.output_dir;

        output.field("Source", config.docs_resolved.source_dir.display());
        output.field("Output", output_dir.display());

        let site = load_site(&config)?;
        if site.nodes().is_empty() {
            output.warning("No example pages found");
        }

        let chrome = chrome(&config);
        let stats = StaticSiteBuilder::new(&site, &chrome, config.site.default_language.as_str())
            .build(output_dir)?;

        output.success(&format!("Built {} pages", stats.pages));
        Ok(())
    }
}
