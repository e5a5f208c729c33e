//! Server-side sessions behind an opaque cookie token.
//!
//! A session only records whether its holder has logged in. The repository
//! never sees any of this; handlers check the session before touching it.

use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub const SESSION_COOKIE: &str = "lob-session";

/// Authentication state carried by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated)
    }
}

#[derive(Debug)]
struct Session {
    state: AuthState,
    created_at: Instant,
}

#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
    password_sha256: String,
    ttl: Duration,
}

impl SessionStore {
    /// `password_sha256` is the lowercase hex digest of the admin password.
    pub fn new(password_sha256: impl Into<String>, ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            password_sha256: password_sha256.into(),
            ttl,
        }
    }

    /// Start an authenticated session if `password` is correct, returning
    /// its token.
    pub fn login(&self, password: &str) -> Option<String> {
        if !self.password_matches(password) {
            return None;
        }
        let token = uuid::Uuid::new_v4().simple().to_string();
        let mut sessions = self.sessions.lock();
        sessions.retain(|_, session| session.created_at.elapsed() < self.ttl);
        sessions.insert(
            token.clone(),
            Session {
                state: AuthState::Authenticated,
                created_at: Instant::now(),
            },
        );
        Some(token)
    }

    pub fn logout(&self, token: &str) {
        self.sessions.lock().remove(token);
    }

    /// State of the session behind `token`. Unknown and expired tokens are
    /// anonymous; expired ones are dropped.
    pub fn auth_state(&self, token: &str) -> AuthState {
        let mut sessions = self.sessions.lock();
        let Some((state, created_at)) = sessions
            .get(token)
            .map(|session| (session.state, session.created_at))
        else {
            return AuthState::Anonymous;
        };
        if created_at.elapsed() >= self.ttl {
            sessions.remove(token);
            return AuthState::Anonymous;
        }
        state
    }

    fn password_matches(&self, password: &str) -> bool {
        let digest = hex::encode(Sha256::digest(password.as_bytes()));
        digest.eq_ignore_ascii_case(&self.password_sha256)
    }
}

/// Extract the session token from a `Cookie` header value.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value carrying a session token.
pub fn session_cookie(token: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, token)
}

/// `Set-Cookie` value that clears the session cookie.
pub fn expired_session_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        SESSION_COOKIE
    )
}
