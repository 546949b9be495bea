//! Static asset serving for `/static/*path`.

use std::io::ErrorKind;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use super::handlers::AppError;
use super::{pages, AppState};

/// Content type from the file extension; unknown extensions are served as
/// opaque bytes.
fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("html") => "text/html; charset=utf-8",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(pages::error("404", "asset not found"))).into_response()
}

/// Serve a file from the configured static directory.
///
/// The request path is validated segment by segment so `..` can never escape
/// the static root. Missing files and directories answer 404; anything else
/// that fails on the filesystem surfaces as a 500.
pub async fn serve_static(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    if path
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return Ok(not_found());
    }

    let full = state.static_dir.join(&path);
    match tokio::fs::metadata(&full).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Ok(not_found()),
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(not_found()),
        Err(e) => return Err(e.into()),
    }

    let bytes = tokio::fs::read(&full).await?;
    let content_type = content_type_for(&path);
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, content_type)], bytes).into_response())
}
