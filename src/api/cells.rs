use axum::extract::{Path, State};
use axum::response::{Html, Response};
use axum::Form;
use serde::Deserialize;

use super::auth::RequireAuth;
use super::{cell_path, found, AppState};
use crate::domain::{CellDraft, CellId, CellUpdate, Source};
use crate::error::{AppError, RepoError};
use crate::render;

#[derive(Debug, Deserialize)]
pub struct NewCellForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub source: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCellForm {
    #[serde(default)]
    pub cell_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub room: String,
}

pub async fn view_cell(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let id = CellId::new(id);
    let cell = state.repo.get_cell(&id).inspect_err(|e| {
        tracing::warn!(cell_id = %id, error = %e, "Error when returning card");
    })?;
    let links = state.repo.linked_cells(&id)?;
    Ok(Html(render::card_page(&cell, &links)))
}

pub async fn edit_cell(
    _auth: RequireAuth,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let cell = state.repo.get_cell(&CellId::new(id))?;
    Ok(Html(render::edit_card_page(&cell)))
}

pub async fn create_cell(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Form(form): Form<NewCellForm>,
) -> Result<Response, AppError> {
    tracing::info!(title = %form.title, "New cell");
    let mut draft = CellDraft::new(form.title, form.body, form.room);
    if !form.source.trim().is_empty() {
        draft.sources.push(Source::new(form.source));
    }

    let id = state.repo.new_cell(draft).map_err(|e| {
        tracing::warn!(error = %e, "Error when creating card");
        AppError::BadRequest(format!("Error when creating card: {}", e))
    })?;
    Ok(found(&cell_path(id.as_str())))
}

pub async fn save_cell(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Form(form): Form<SaveCellForm>,
) -> Result<Response, AppError> {
    let update = CellUpdate {
        id: CellId::new(form.cell_id),
        title: form.title,
        body: form.body,
        room: form.room,
    };

    match state.repo.update_cell(update) {
        Ok(id) => {
            tracing::info!(cell_id = %id, "Updated cell");
            Ok(found(&cell_path(id.as_str())))
        }
        Err(RepoError::NotFound(msg)) => {
            tracing::warn!(error = %msg, "Error when updating card");
            Err(AppError::NotFound(msg))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Error when updating card");
            Err(AppError::BadRequest(format!("Error when updating card: {}", e)))
        }
    }
}
