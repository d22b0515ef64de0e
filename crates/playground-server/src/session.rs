//! Per-browser session isolation
//!
//! Each browser carries a random session id in a cookie; the store maps it
//! to that browser's [`SessionState`]. Handlers work on an owned copy and
//! write it back, so no entry is locked while a provider call runs.
//! Sessions idle for longer than the configured TTL are dropped.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use http::HeaderValue;
use http::header::{COOKIE, SET_COOKIE};
use http::request::Parts;
use mini_moka::sync::Cache;
use playground_config::SessionConfig;
use playground_llm::SessionState;
use uuid::Uuid;

/// Cookie holding the session id
pub const SESSION_COOKIE: &str = "playground_session";

/// In-memory session states keyed by session id, evicted when idle
pub struct SessionStore {
    sessions: Cache<Uuid, SessionState>,
}

impl SessionStore {
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_limits(config.max_sessions, Duration::from_secs(config.idle_ttl))
    }

    fn with_limits(max_sessions: u64, idle_ttl: Duration) -> Self {
        let sessions = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(idle_ttl)
            .build();

        Self { sessions }
    }

    /// Copy of the session's state, if it is still alive
    pub fn get(&self, id: Uuid) -> Option<SessionState> {
        self.sessions.get(&id)
    }

    /// Copy of the session's state, creating it with `init` when missing
    pub fn load_or_create(&self, id: Uuid, init: impl FnOnce() -> SessionState) -> SessionState {
        if let Some(state) = self.sessions.get(&id) {
            return state;
        }

        tracing::debug!(session = %id, "session created");
        let state = init();
        self.sessions.insert(id, state.clone());
        state
    }

    /// Replace the session's state
    pub fn store(&self, id: Uuid, state: SessionState) {
        self.sessions.insert(id, state);
    }

    /// Apply `change` to the latest stored state and return the result
    ///
    /// Used to write back after an await, so a change made by another
    /// request in the meantime is kept unless `change` overwrites it.
    pub fn update(
        &self,
        id: Uuid,
        init: impl FnOnce() -> SessionState,
        change: impl FnOnce(&mut SessionState),
    ) -> SessionState {
        let mut state = self.load_or_create(id, init);
        change(&mut state);
        self.store(id, state.clone());
        state
    }
}

/// Session id of the caller, minted when the request carries none
#[derive(Debug, Clone, Copy)]
pub struct SessionId {
    id: Uuid,
    fresh: bool,
}

impl SessionId {
    pub const fn id(self) -> Uuid {
        self.id
    }

    /// Attach the session cookie to a response if the id was just minted
    pub fn attach(self, response: impl IntoResponse) -> Response {
        let mut response = response.into_response();
        if self.fresh
            && let Ok(cookie) =
                HeaderValue::from_str(&format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.id))
        {
            response.headers_mut().append(SET_COOKIE, cookie);
        }
        response
    }
}

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let existing = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|header| header.split(';'))
            .find_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                (name == SESSION_COOKIE).then(|| Uuid::parse_str(value).ok()).flatten()
            });

        Ok(existing.map_or_else(
            || Self {
                id: Uuid::new_v4(),
                fresh: true,
            },
            |id| Self { id, fresh: false },
        ))
    }
}
