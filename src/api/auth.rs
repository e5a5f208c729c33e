use async_trait::async_trait;
use axum::extract::{FromRequestParts, State};
use axum::http::{header, request::Parts, HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use super::{found, AppState};
use crate::session::{
    expired_session_cookie, session_cookie, token_from_cookie_header, AuthState,
};

pub const LOGIN_PAGE: &str = "/page/auth.html";

/// Extractor that only succeeds for requests carrying an authenticated
/// session. Anyone else is redirected to the login page.
#[derive(Debug, Clone, Copy)]
pub struct RequireAuth;

#[async_trait]
impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if request_auth_state(&parts.headers, state).is_authenticated() {
            Ok(RequireAuth)
        } else {
            tracing::debug!(path = %parts.uri.path(), "Unauthenticated request, redirecting to login");
            Err(found(LOGIN_PAGE))
        }
    }
}

fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(token_from_cookie_header)
}

fn request_auth_state(headers: &HeaderMap, state: &AppState) -> AuthState {
    match session_token(headers) {
        Some(token) => state.sessions.auth_state(token),
        None => AuthState::Anonymous,
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    match state.sessions.login(&form.password) {
        Some(token) => {
            tracing::info!("Login succeeded");
            let mut response = found("/rooms");
            if let Ok(cookie) = session_cookie(&token).parse::<HeaderValue>() {
                response.headers_mut().insert(header::SET_COOKIE, cookie);
            }
            response
        }
        None => {
            tracing::warn!("Login failed: wrong password");
            found(LOGIN_PAGE)
        }
    }
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_token(&headers) {
        state.sessions.logout(token);
    }
    (
        [(header::SET_COOKIE, expired_session_cookie())],
        found(LOGIN_PAGE),
    )
}
