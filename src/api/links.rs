use axum::extract::{Path, Query, State};
use axum::response::{Html, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use super::auth::RequireAuth;
use super::{cell_path, found, AppState, SearchQuery};
use crate::domain::CellId;
use crate::error::AppError;
use crate::render;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkForm {
    #[serde(default)]
    pub cell_to_link: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlinkForm {
    #[serde(default)]
    pub cell_to_unlink: String,
}

/// Autocomplete entry for the link picker.
#[derive(Debug, Serialize)]
pub struct CellOption {
    pub value: String,
    pub label: String,
}

fn links_path(id: &CellId) -> String {
    format!("{}/links", cell_path(id.as_str()))
}

pub async fn edit_links(
    _auth: RequireAuth,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let id = CellId::new(id);
    let cell = state.repo.get_cell(&id)?;
    let links = state.repo.linked_cells(&id)?;
    Ok(Html(render::edit_links_page(&cell, &links)))
}

/// Link failures are logged and the editor is shown again either way.
pub async fn link_cells(
    _auth: RequireAuth,
    Path(id): Path<String>,
    State(state): State<AppState>,
    Form(form): Form<LinkForm>,
) -> Response {
    let id = CellId::new(id);
    let other = CellId::new(form.cell_to_link);
    if let Err(e) = state.repo.link_cells(&id, &other) {
        tracing::warn!(cell_id = %id, other = %other, error = %e, "Error when linking cells");
    }
    found(&links_path(&id))
}

pub async fn unlink_cells(
    _auth: RequireAuth,
    Path(id): Path<String>,
    State(state): State<AppState>,
    Form(form): Form<UnlinkForm>,
) -> Response {
    let id = CellId::new(id);
    let other = CellId::new(form.cell_to_unlink);
    if let Err(e) = state.repo.unlink_cells(&id, &other) {
        tracing::warn!(cell_id = %id, other = %other, error = %e, "Error when unlinking cells");
    }
    found(&links_path(&id))
}

pub async fn search_cells(
    Query(params): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Json<Vec<CellOption>> {
    tracing::debug!(term = %params.term, "Searching for cells");
    let options = state
        .repo
        .search_cells(&params.term)
        .into_iter()
        .map(|cell| CellOption {
            label: cell.summary(),
            value: cell.id.0,
        })
        .collect();
    Json(options)
}
