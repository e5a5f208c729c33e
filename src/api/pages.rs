use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use super::AppState;
use crate::error::AppError;

/// Serve a file from the pages directory. Only plain file names are
/// accepted; anything that could leave the directory is treated as missing.
pub async fn static_page(
    Path(page): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !is_plain_file_name(&page) {
        tracing::warn!(page = %page, "Rejected page name");
        return Err(AppError::NotFound(page));
    }

    let path = state.config.pages_dir.join(&page);
    let contents = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(page = %page, "Error when returning page: not found");
            return Err(AppError::NotFound(page));
        }
        Err(e) => {
            tracing::error!(page = %page, error = %e, "Error when returning page");
            return Err(e.into());
        }
    };

    Ok(([(header::CONTENT_TYPE, content_type(&page))], contents).into_response())
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
        && !name.contains("..")
}

fn content_type(name: &str) -> &'static str {
    match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
