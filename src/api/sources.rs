use axum::extract::{Path, Query, State};
use axum::response::{Html, Response};
use axum::{Form, Json};
use serde::Deserialize;

use super::auth::RequireAuth;
use super::{cell_path, found, AppState, SearchQuery};
use crate::domain::{CellId, Source};
use crate::error::AppError;
use crate::render;

#[derive(Debug, Deserialize)]
pub struct SourceForm {
    #[serde(default)]
    pub source: String,
}

fn sources_path(id: &CellId) -> String {
    format!("{}/sources", cell_path(id.as_str()))
}

pub async fn edit_sources(
    _auth: RequireAuth,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let cell = state.repo.get_cell(&CellId::new(id))?;
    Ok(Html(render::edit_sources_page(&cell)))
}

pub async fn add_source(
    _auth: RequireAuth,
    Path(id): Path<String>,
    State(state): State<AppState>,
    Form(form): Form<SourceForm>,
) -> Result<Response, AppError> {
    let id = state
        .repo
        .add_source_to_cell(&CellId::new(id), Source::new(form.source))
        .inspect_err(|e| tracing::warn!(error = %e, "Error when adding source"))?;
    Ok(found(&sources_path(&id)))
}

pub async fn remove_source(
    _auth: RequireAuth,
    Path(id): Path<String>,
    State(state): State<AppState>,
    Form(form): Form<SourceForm>,
) -> Result<Response, AppError> {
    let id = state
        .repo
        .remove_source_from_cell(&CellId::new(id), &Source::new(form.source))
        .inspect_err(|e| tracing::warn!(error = %e, "Error when removing source"))?;
    Ok(found(&sources_path(&id)))
}

pub async fn search_sources(
    Query(params): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Json<Vec<Source>> {
    Json(state.repo.search_sources(&params.term))
}
