use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Json;

use super::{AppState, SearchQuery};
use crate::error::AppError;
use crate::render;

pub async fn list_rooms(State(state): State<AppState>) -> Html<String> {
    Html(render::rooms_page(&state.repo.list_rooms()))
}

/// A room with no cells does not exist, so it renders the not-found page.
pub async fn view_room(
    Path(room): Path<String>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let cells = state.repo.list_cells_in_room(&room);
    if cells.is_empty() {
        tracing::warn!(room = %room, "Error when entering room: no cells");
        return Err(AppError::NotFound(format!("room {}", room)));
    }
    Ok(Html(render::room_page(&room, &cells)))
}

pub async fn search_rooms(
    Query(params): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Json<Vec<String>> {
    Json(state.repo.search_rooms(&params.term))
}
