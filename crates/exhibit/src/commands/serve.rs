//! `exhibit serve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use exhibit_config::{CliSettings, Config};
use exhibit_server::{ServerConfig, run_server};

use super::{chrome, load_site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover exhibit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (info-level logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content loading fails, or the
    /// server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.field("Source", config.docs_resolved.source_dir.display());
        let site = load_site(&config)?;
        output.field("Pages", site.nodes().len());
        output.highlight(&format!(
            "Serving on http://{}:{}",
            config.server.host, config.server.port
        ));

        let server_config = ServerConfig {
            host: config.server.host.clone(),
            port: config.server.port,
            languages: config.site.languages.clone(),
            default_language: config.site.default_language.clone(),
        };
        run_server(server_config, Arc::new(site), chrome(&config))
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
