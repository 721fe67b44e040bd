//! REST calls against the tic-tac-toe backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since games are
//! only created from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<Session, ApiError>`; callers render the error's
//! message and keep their previous session untouched.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use super::error::{ApiAction, classify_failure};
use super::types::{Mark, Session};

/// Mark that opens every new game.
pub const STARTING_MARK: Mark = Mark::X;

#[cfg(any(test, feature = "hydrate"))]
fn new_game_endpoint(base: &str) -> String {
    format!("{base}/tictactoe/new")
}

#[cfg(any(test, feature = "hydrate"))]
fn move_endpoint(base: &str, session_id: &str) -> String {
    format!("{base}/tictactoe/{session_id}/move")
}

/// Turn a finished HTTP exchange into a session or a classified error.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_response(
    action: ApiAction,
    ok: bool,
    status: u16,
    body: &str,
) -> Result<Session, ApiError> {
    if !ok {
        return Err(classify_failure(action, status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(
    action: ApiAction,
    url: &str,
    body: &T,
) -> Result<Session, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let text = resp.text().await.unwrap_or_default();
    session_from_response(action, resp.ok(), resp.status(), &text)
}

/// Start a new game via `POST /tictactoe/new`.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the backend is unreachable and
/// [`ApiError::Server`] on a non-2xx status.
pub async fn create_session() -> Result<Session, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = new_game_endpoint(&super::config::api_base());
        let body = super::types::NewGameRequest { starting_player: STARTING_MARK };
        let result = post_json(ApiAction::Create, &url, &body).await;
        match &result {
            Ok(session) => log::debug!("session created: id={}", session.id),
            Err(e) => log::warn!("session create failed: {e}"),
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Apply a move via `POST /tictactoe/{id}/move`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] with the backend's `detail` when the move
/// is rejected, [`ApiError::Server`] for other non-2xx statuses and
/// [`ApiError::Network`] when the backend is unreachable.
pub async fn submit_move(session_id: &str, index: usize) -> Result<Session, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = move_endpoint(&super::config::api_base(), session_id);
        let body = super::types::MoveRequest { index };
        let result = post_json(ApiAction::Move, &url, &body).await;
        if let Err(e) = &result {
            log::warn!("move rejected: session={session_id} index={index}: {e}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session_id, index);
        Err(ApiError::Unavailable)
    }
}

/// Start `count` games concurrently and wait for all of them to settle.
///
/// Results are index-aligned with the request order; one failure does not
/// affect the others.
pub async fn create_sessions(count: usize) -> Vec<Result<Session, ApiError>> {
    #[cfg(feature = "hydrate")]
    {
        futures::future::join_all((0..count).map(|_| create_session())).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (0..count).map(|_| Err(ApiError::Unavailable)).collect()
    }
}
