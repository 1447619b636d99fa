//! Example page endpoints.
//!
//! Serves rendered example pages as HTML and redirects `/` to the first page
//! of the default language.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use exhibit_build::{render_not_found, render_page};
use md5::{Digest, Md5};

use crate::error::ServerError;
use crate::handlers::to_url_path;
use crate::state::AppState;

/// Handle GET /.
pub(crate) async fn get_root(State(state): State<Arc<AppState>>) -> Result<Redirect, ServerError> {
    match state.site.first_page(&state.default_language) {
        Some(first) => Ok(Redirect::temporary(&first)),
        None => Err(not_found(&state, "/")),
    }
}

/// Handle GET /{*path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let path = to_url_path(&path);
    let page = state.site.page(&path).map_err(|e| {
        tracing::debug!(path = %path, error = %e, "Page not found");
        not_found(&state, &path)
    })?;

    let html = render_page(&page, &state.chrome);
    let etag = compute_etag(&html);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "no-cache".to_owned()),
        ],
        Html(html),
    )
        .into_response())
}

fn not_found(state: &AppState, path: &str) -> ServerError {
    let lang = state.language_of(path);
    ServerError::PageNotFound {
        path: path.to_owned(),
        html: render_not_found(lang, path, &state.chrome),
    }
}

/// Quoted, truncated MD5 hex digest of the rendered page.
fn compute_etag(html: &str) -> String {
    let hash = Md5::digest(html.as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_etag_is_quoted_and_stable() {
        let a = compute_etag("<p>a</p>");
        let b = compute_etag("<p>a</p>");

        assert_eq!(a, b);
        assert!(a.starts_with('"') && a.ends_with('"'));
        assert_eq!(a.len(), 18);
        assert_ne!(a, compute_etag("<p>b</p>"));
    }

    #[test]
    fn test_to_url_path() {
        assert_eq!(to_url_path("en/examples/line"), "/en/examples/line");
        assert_eq!(to_url_path("/en"), "/en");
    }
}
