//! Event handlers: each reads the posted form, applies one action and
//! answers with the re-rendered page
//!
//! Requests of one session may overlap. Writes go through
//! [`SessionStore::update`](crate::session::SessionStore::update) so each
//! handler only replaces what it changed: a theme toggle made while a
//! generation is in flight survives it. Two overlapping generations still
//! race, and the one finishing last sets the form and outcome.

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use http::StatusCode;
use playground_llm::{FormInput, SessionState};

use crate::error::ServerError;
use crate::session::SessionId;
use crate::state::AppState;

/// Render the page for the caller's session
///
/// Does not store anything, so visitors that never post leave no session
/// behind.
pub async fn index(State(state): State<Arc<AppState>>, session: SessionId) -> Result<Response, ServerError> {
    let current = state
        .sessions
        .get(session.id())
        .unwrap_or_else(|| state.new_session());
    render(&state, session, &current)
}

/// Apply the posted form and generate a response
pub async fn generate(
    State(state): State<Arc<AppState>>,
    session: SessionId,
    Form(input): Form<FormInput>,
) -> Result<Response, ServerError> {
    let mut working = state.sessions.load_or_create(session.id(), || state.new_session());
    working.form.apply(input);

    state.mediator.generate(&mut working).await;

    let current = state
        .sessions
        .update(session.id(), || state.new_session(), |stored| stored.adopt_generation(working));
    render(&state, session, &current)
}

/// Apply the posted form and load the selected sample prompt
pub async fn sample(
    State(state): State<Arc<AppState>>,
    session: SessionId,
    Form(input): Form<FormInput>,
) -> Result<Response, ServerError> {
    let current = state.sessions.update(
        session.id(),
        || state.new_session(),
        |stored| {
            let selected = input.sample;
            stored.form.apply(input);

            if let Some(sample) = selected {
                stored.form.select_sample_prompt(sample);
            }
        },
    );
    render(&state, session, &current)
}

/// Switch between light and dark theme
pub async fn toggle_theme(State(state): State<Arc<AppState>>, session: SessionId) -> Response {
    state
        .sessions
        .update(session.id(), || state.new_session(), SessionState::toggle_theme);

    session.attach(Redirect::to("/"))
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

fn render(state: &AppState, session: SessionId, current: &SessionState) -> Result<Response, ServerError> {
    let page = state.pages.render(current)?;
    Ok(session.attach(Html(page)))
}
