#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use labyrinth::api::{self, AppState};
use labyrinth::config::Config;
use labyrinth::Repository;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const PASSWORD: &str = "secret";
// sha256("secret")
pub const PASSWORD_SHA256: &str =
    "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b";
pub const DEMO_CELL_ID: &str = labyrinth::repository::DEMO_CELL_ID;

pub struct TestApp {
    pub app: axum::Router,
    pub repo: Arc<Repository>,
    pub temp: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

pub fn setup_test_app() -> TestApp {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("auth.html"),
        "<form action=\"/login\"></form>",
    )
    .unwrap();

    let config = Config {
        port: 0,
        pages_dir: temp.path().to_path_buf(),
        admin_password_sha256: PASSWORD_SHA256.to_string(),
        session_ttl: Duration::from_secs(3600),
        seed_demo: true,
    };

    let repo = Arc::new(Repository::seeded());
    let app = api::create_router(AppState::new(repo.clone(), config));
    TestApp { app, repo, temp }
}

pub async fn send(app: &axum::Router, req: Request<Body>) -> TestResponse {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &axum::Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn post_form(
    app: &axum::Router,
    uri: &str,
    fields: &[(&str, &str)],
    cookie: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::from(encode_form(fields))).unwrap()).await
}

/// Log in with the test password and return the `Cookie` header value.
pub async fn login(app: &axum::Router) -> String {
    let resp = post_form(app, "/login", &[("password", PASSWORD)], None).await;
    assert_eq!(resp.status, StatusCode::FOUND);
    let set_cookie = resp
        .headers
        .get(header::SET_COOKIE)
        .expect("login sets a cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Substring of `page` between the `start` and `end` markers.
pub fn extract_from_page<'a>(page: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = page.find(start)? + start.len();
    let to = page[from..].find(end)? + from;
    Some(&page[from..to])
}
