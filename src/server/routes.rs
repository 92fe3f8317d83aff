// routes.rs - Request classification and asset responses

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Where the served files live.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub root: PathBuf,
}

/// The three fixed outcomes a request path resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Stylesheet,
    Fallback,
}

impl Route {
    /// Classify a request path. Anything unrecognized falls back to
    /// the home document.
    pub fn classify(path: &str) -> Self {
        match path {
            "/" | "/index.html" => Route::Home,
            "/style.css" => Route::Stylesheet,
            _ => Route::Fallback,
        }
    }

    /// File served for this outcome, relative to the site root.
    pub fn file(self) -> &'static str {
        match self {
            Route::Home | Route::Fallback => "index.html",
            Route::Stylesheet => "style.css",
        }
    }

    /// Content type sent with a successful response.
    pub fn content_type(self) -> &'static str {
        match self {
            Route::Home | Route::Fallback => "text/html",
            Route::Stylesheet => "text/css",
        }
    }
}

/// Build the application router.
pub fn router(config: SiteConfig) -> Router {
    Router::new()
        .route("/", get(serve_home))
        .route("/index.html", get(serve_home))
        .route("/style.css", get(serve_stylesheet))
        .fallback(serve_fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(config))
}

async fn serve_home(State(config): State<Arc<SiteConfig>>) -> Response {
    respond(&config, Route::Home).await
}

async fn serve_stylesheet(State(config): State<Arc<SiteConfig>>) -> Response {
    respond(&config, Route::Stylesheet).await
}

async fn serve_fallback(State(config): State<Arc<SiteConfig>>) -> Response {
    respond(&config, Route::Fallback).await
}

/// Read the route's file and wrap it in a 200, or answer the fixed
/// plain-text 500 when the read fails.
async fn respond(config: &SiteConfig, route: Route) -> Response {
    let path = config.root.join(route.file());
    match tokio::fs::read_to_string(&path).await {
        Ok(body) => ([(header::CONTENT_TYPE, route.content_type())], body).into_response(),
        Err(err) => {
            tracing::warn!("failed to read {}: {err}", path.display());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error loading {}", route.file()),
            )
                .into_response()
        }
    }
}
