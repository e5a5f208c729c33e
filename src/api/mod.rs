pub mod auth;
pub mod cells;
pub mod health;
pub mod links;
pub mod pages;
pub mod rooms;
pub mod sources;

use crate::config::Config;
use crate::render::encode_segment;
use crate::repository::Repository;
use crate::session::SessionStore;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub sessions: Arc<SessionStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: Config) -> Self {
        let sessions = Arc::new(SessionStore::new(
            config.admin_password_sha256.clone(),
            config.session_ttl,
        ));
        Self {
            repo,
            sessions,
            config,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/cell/:id", get(cells::view_cell))
        .route("/cell/:id/edit", get(cells::edit_cell))
        .route("/cell/:id/sources", get(sources::edit_sources))
        .route("/cell/:id/sources/add", post(sources::add_source))
        .route("/cell/:id/sources/remove", post(sources::remove_source))
        .route("/cell/:id/links", get(links::edit_links))
        .route("/cell/:id/links/add", post(links::link_cells))
        .route("/cell/:id/links/remove", post(links::unlink_cells))
        .route("/newCell", post(cells::create_cell))
        .route("/save", post(cells::save_cell))
        .route("/search/sources", get(sources::search_sources))
        .route("/search/rooms", get(rooms::search_rooms))
        .route("/search/cells", get(links::search_cells))
        .route("/rooms", get(rooms::list_rooms))
        .route("/room/:room", get(rooms::view_room))
        .route("/page/:page", get(pages::static_page))
        .route("/login", post(auth::login))
        .route("/logout", get(auth::logout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Query string of the autocomplete search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub term: String,
}

/// 302 redirect, the status the browser forms expect after a POST.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

pub(crate) fn cell_path(id: &str) -> String {
    format!("/cell/{}", encode_segment(id))
}
