//! Navigation API endpoint.
//!
//! Returns the sidebar menu for a page, or for the default language when no
//! path is given.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use exhibit_site::Menu;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::handlers::to_url_path;
use crate::state::AppState;

/// Query parameters for GET /api/navigation.
#[derive(Debug, Deserialize)]
pub(crate) struct NavigationQuery {
    /// Page the menu is built for.
    path: Option<String>,
}

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    lang: String,
    menu: Menu,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavigationQuery>,
) -> Result<Json<NavigationResponse>, ServerError> {
    let Some(path) = query.path.filter(|p| !p.is_empty()) else {
        let lang = state.default_language.clone();
        let menu = state.site.menu(&lang, "");
        return Ok(Json(NavigationResponse { lang, menu }));
    };

    let path = to_url_path(&path);
    let resolution = state
        .site
        .resolve(&path)
        .map_err(|_| ServerError::NavigationNotFound(path.clone()))?;
    let lang = exhibit_site::slug::language(&resolution.node.slug)
        .unwrap_or(&state.default_language)
        .to_owned();
    let menu = state.site.menu(&lang, &resolution.node.slug);

    Ok(Json(NavigationResponse { lang, menu }))
}
