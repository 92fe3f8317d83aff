//! The static responder's three-branch dispatch: home, stylesheet,
//! fallback, and the fixed 500 on a failed read.

#![cfg(not(target_arch = "wasm32"))]

use std::fs;
use std::path::PathBuf;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use starfield_engine::server::{router, Route, SiteConfig};
use tower::ServiceExt;

const HOME_BODY: &str = "<html><body>home</body></html>";
const CSS_BODY: &str = "body { margin: 0; }";

fn site_fixture(name: &str, with_home: bool) -> SiteConfig {
    let root: PathBuf = std::env::temp_dir().join(format!(
        "starfield-engine-{name}-{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(&root).unwrap();
    if with_home {
        fs::write(root.join("index.html"), HOME_BODY).unwrap();
    }
    fs::write(root.join("style.css"), CSS_BODY).unwrap();
    SiteConfig { root }
}

async fn get(config: SiteConfig, path: &str) -> (StatusCode, String, String) {
    let response = router(config)
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[test]
fn classification_covers_the_three_outcomes() {
    assert_eq!(Route::classify("/"), Route::Home);
    assert_eq!(Route::classify("/index.html"), Route::Home);
    assert_eq!(Route::classify("/style.css"), Route::Stylesheet);
    assert_eq!(Route::classify("/nonexistent"), Route::Fallback);
    assert_eq!(Route::classify("/blog/post/42"), Route::Fallback);
    assert_eq!(Route::classify("/style.css.bak"), Route::Fallback);
}

#[tokio::test]
async fn home_and_index_return_identical_html() {
    let config = site_fixture("home", true);

    let (status, content_type, body) = get(config.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/html");
    assert_eq!(body, HOME_BODY);

    let (status, content_type, body_index) = get(config, "/index.html").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/html");
    assert_eq!(body_index, body);
}

#[tokio::test]
async fn stylesheet_is_served_as_css() {
    let config = site_fixture("css", true);
    let (status, content_type, body) = get(config, "/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/css");
    assert_eq!(body, CSS_BODY);
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_home_document() {
    let config = site_fixture("fallback", true);

    for path in ["/nonexistent", "/blog/post/42", "/index", "/style"] {
        let (status, content_type, body) = get(config.clone(), path).await;
        assert_eq!(status, StatusCode::OK, "no 404s: {path}");
        assert_eq!(content_type, "text/html");
        assert_eq!(body, HOME_BODY);
    }
}

#[tokio::test]
async fn missing_home_document_is_a_500_everywhere() {
    let config = site_fixture("no-home", false);

    for path in ["/", "/index.html", "/nonexistent"] {
        let (status, content_type, body) = get(config.clone(), path).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{path}");
        assert!(content_type.starts_with("text/plain"), "{content_type}");
        assert_eq!(body, "Error loading index.html");
    }
}

#[tokio::test]
async fn missing_stylesheet_is_a_500() {
    let config = site_fixture("no-css", true);
    fs::remove_file(config.root.join("style.css")).unwrap();

    let (status, _, body) = get(config, "/style.css").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error loading style.css");
}
