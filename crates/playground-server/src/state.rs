use playground_config::SessionConfig;
use playground_llm::{Mediator, SessionState};
use secrecy::SecretString;

use crate::render::PageRenderer;
use crate::session::SessionStore;

/// Shared state behind every handler
pub struct AppState {
    pub(crate) sessions: SessionStore,
    pub(crate) mediator: Mediator,
    pub(crate) pages: PageRenderer,
    default_api_key: Option<SecretString>,
}

impl AppState {
    pub(crate) fn new(
        sessions: &SessionConfig,
        mediator: Mediator,
        pages: PageRenderer,
        default_api_key: Option<SecretString>,
    ) -> Self {
        Self {
            sessions: SessionStore::new(sessions),
            mediator,
            pages,
            default_api_key,
        }
    }

    /// State for a session seen for the first time
    pub(crate) fn new_session(&self) -> SessionState {
        SessionState::new(self.default_api_key.clone())
    }
}
