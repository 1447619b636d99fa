//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::pages::get_root))
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/{*path}", get(handlers::pages::get_page))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use exhibit_build::PageChrome;
    use exhibit_site::{DocNode, ExampleCatalog, ExampleSite};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    fn node(slug: &str, title: &str, order: i64) -> DocNode {
        DocNode {
            slug: slug.to_owned(),
            title: title.to_owned(),
            icon: None,
            order: Some(order),
            html: format!("<p>{title} body</p>"),
            source_path: PathBuf::from(format!("{}.md", slug.trim_start_matches('/'))),
        }
    }

    fn create_app() -> Router {
        let site = ExampleSite::new(
            vec![
                node("/en/examples/line/basic", "Basic", 1),
                node("/en/examples/line/basic/API", "Basic API", 1),
                node("/en/examples/line/step", "Step", 2),
                node("/zh/examples/line/basic", "基础", 1),
            ],
            ExampleCatalog::default(),
        );
        create_router(Arc::new(AppState {
            site: Arc::new(site),
            chrome: PageChrome::new("G2"),
            languages: vec!["en".to_owned(), "zh".to_owned()],
            default_language: "en".to_owned(),
        }))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_root_redirects_to_first_page() {
        let response = get(create_app(), "/").await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/en/examples/line/basic"
        );
    }

    #[tokio::test]
    async fn test_page_renders_html() {
        let response = get(create_app(), "/en/examples/line/basic/API").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::ETAG));
        let html = body_text(response).await;
        assert!(html.contains("<title>Basic - G2</title>"));
        assert!(html.contains("<p>Basic API body</p>"));
        assert!(html.contains("aria-selected=\"true\">API</a>"));
    }

    #[tokio::test]
    async fn test_page_trailing_slash() {
        let response = get(create_app(), "/en/examples/line/step/").await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_page_not_modified() {
        let app = create_app();
        let first = get(app.clone(), "/en/examples/line/step").await;
        let etag = first.headers()[header::ETAG].clone();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/en/examples/line/step")
                    .header(header::IF_NONE_MATCH, etag)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn test_unknown_page_is_localized_not_found() {
        let response = get(create_app(), "/zh/examples/pie").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_text(response).await;
        assert!(html.contains("<html lang=\"zh\">"));
        assert!(html.contains("页面不存在"));
    }

    #[tokio::test]
    async fn test_unknown_language_not_found_uses_default() {
        let response = get(create_app(), "/favicon.ico").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_text(response).await;
        assert!(html.contains("<html lang=\"en\">"));
    }

    #[tokio::test]
    async fn test_navigation_for_path() {
        let response = get(
            create_app(),
            "/api/navigation?path=/en/examples/line/step",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["lang"], "en");
        assert_eq!(json["menu"]["selectedKey"], "/en/examples/line/step");
        assert_eq!(json["menu"]["openKeys"][0], "/en/examples/line");
        let items = &json["menu"]["entries"][0]["items"];
        assert_eq!(items[0]["key"], "/en/examples/line/basic");
        assert_eq!(items[1]["selected"], true);
    }

    #[tokio::test]
    async fn test_navigation_default_language() {
        let response = get(create_app(), "/api/navigation").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["lang"], "en");
        assert_eq!(json["menu"]["entries"][0]["kind"], "submenu");
    }

    #[tokio::test]
    async fn test_navigation_unknown_path() {
        let response = get(create_app(), "/api/navigation?path=/en/examples/nope").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"], "Page not found");
    }

    #[tokio::test]
    async fn test_security_headers() {
        let response = get(create_app(), "/en/examples/line/basic").await;

        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }
}
