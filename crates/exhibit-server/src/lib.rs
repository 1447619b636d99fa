//! Preview server for Exhibit example galleries.
//!
//! Serves server-rendered example pages with axum:
//! - `GET /` redirects to the first page of the default language
//! - `GET /api/navigation?path=...` returns the sidebar menu as JSON
//! - `GET /{*path}` renders the example page, or a 404 page
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use exhibit_build::PageChrome;
//! use exhibit_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7878,
//!         languages: vec!["en".to_owned()],
//!         default_language: "en".to_owned(),
//!     };
//!
//!     run_server(config, Arc::new(site), PageChrome::new("G2")).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use exhibit_build::PageChrome;
use exhibit_site::ExampleSite;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Languages content is written in.
    pub languages: Vec<String>,
    /// Language for `/` and for not-found pages outside any language.
    pub default_language: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            languages: vec!["en".to_owned()],
            default_language: "en".to_owned(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(
    config: ServerConfig,
    site: Arc<ExampleSite>,
    chrome: PageChrome,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        site,
        chrome,
        languages: config.languages,
        default_language: config.default_language,
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}
