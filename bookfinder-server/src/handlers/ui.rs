//! Page and fragment handlers for the browser UI

use crate::state::{AppState, Session};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bookfinder_core::{render, Mode, RandomPanel};
use maud::Markup;
use serde::Deserialize;
use uuid::Uuid;

const APP_JS: &str = include_str!("../../assets/app.js");

async fn find_session(state: &AppState, id: &Uuid) -> Result<Session, StatusCode> {
    state.session(id).await.ok_or(StatusCode::NOT_FOUND)
}

/// Full page. Every load starts a new session in recommend mode.
pub async fn index(State(state): State<AppState>) -> Markup {
    let (id, session) = state.create_session().await;
    let client = session.lock().await;
    render::page(&client, &id.to_string())
}

/// Page script
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        APP_JS,
    )
}

/// Switch mode and return the re-rendered search bar
pub async fn set_mode(
    State(state): State<AppState>,
    Path((id, mode)): Path<(Uuid, String)>,
) -> Result<Markup, StatusCode> {
    let mode: Mode = mode.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    let session = find_session(&state, &id).await?;

    let mut client = session.lock().await;
    client.set_mode(mode);
    Ok(render::search_bar(&client))
}

/// Query parameters for a search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Run a search in the session's mode and return the results area.
///
/// The session lock is released while the backend request is in flight, so
/// overlapping searches proceed concurrently; the response always reflects
/// the session's current results, which only the latest search may write.
pub async fn search(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<SearchParams>,
) -> Result<Response, StatusCode> {
    let session = find_session(&state, &id).await?;

    let (api, pending) = {
        let mut client = session.lock().await;
        client.set_input(params.q);
        (client.api(), client.begin_search())
    };
    let Some(pending) = pending else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let outcome = api.run_search(&pending.request).await;

    let mut client = session.lock().await;
    client.complete_search(pending.seq, outcome);
    Ok(render::results(&client).into_response())
}

/// Load the random-books panel. 204 when there is nothing to show.
pub async fn random_books(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, StatusCode> {
    let session = find_session(&state, &id).await?;

    let api = session.lock().await.api();
    let outcome = api.random_books().await;

    let mut client = session.lock().await;
    client.apply_random_books(outcome);
    match client.random_panel() {
        RandomPanel::Visible(_) => Ok(render::random_list(&client).into_response()),
        RandomPanel::Hidden => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Flip a result card's description and return the re-rendered block
pub async fn toggle_description(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Markup, StatusCode> {
    let session = find_session(&state, &id).await?;

    let mut client = session.lock().await;
    client
        .toggle_description(index)
        .ok_or(StatusCode::NOT_FOUND)?;
    render::result_description(&client, index).ok_or(StatusCode::NOT_FOUND)
}

/// Card click: the details callback
pub async fn open_details(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<StatusCode, StatusCode> {
    let session = find_session(&state, &id).await?;

    let client = session.lock().await;
    client.open_details(index).ok_or(StatusCode::NOT_FOUND)?;
    Ok(StatusCode::NO_CONTENT)
}
