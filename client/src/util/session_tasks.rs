//! Async glue between board state and the REST client.
//!
//! Each helper performs the synchronous state transition first (which also
//! enforces the click guards), then spawns the network call on the browser
//! event loop. Results are written back through `try_update`, so a response
//! arriving after its component was torn down lands on a disposed signal and
//! is discarded; one arriving after a reset carries a stale generation and is
//! dropped by the state machine.

#[cfg(test)]
#[path = "session_tasks_test.rs"]
mod session_tasks_test;

use leptos::prelude::*;

use crate::state::board::BoardState;
use crate::state::meta::{BOARD_COUNT, MetaState};
use crate::state::outcome::Outcome;

/// Discard the board's session and request a fresh one.
pub fn start_session(board: RwSignal<BoardState>) {
    let Some(generation) = board.try_update(BoardState::begin_create) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::create_session().await;
        let applied = board.try_update(|b| b.finish_create(generation, result));
        if applied != Some(true) {
            log::debug!("dropped stale create result: generation={generation}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = generation;
}

/// Forward a click on `index` to the backend if the guards admit it.
///
/// `on_outcome` runs at most once per session, when the backend first
/// reports a win or draw.
pub fn play_move(
    board: RwSignal<BoardState>,
    index: usize,
    on_outcome: Option<Callback<Outcome>>,
) {
    let Some(ticket) = board.try_update(|b| b.begin_move(index)).flatten() else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::submit_move(&ticket.session_id, ticket.index).await;
        let report = board
            .try_update(|b| {
                if b.finish_move(&ticket, result) {
                    b.take_outcome_report()
                } else {
                    None
                }
            })
            .flatten();
        if let (Some(outcome), Some(callback)) = (report, on_outcome) {
            callback.run(outcome);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (ticket, on_outcome);
}

/// (Re)start the meta page: clear the outcome grid and acquire a fresh
/// session for every board concurrently.
pub fn start_meta_round(meta: RwSignal<MetaState>, boards: [RwSignal<BoardState>; BOARD_COUNT]) {
    let Some(round) = meta.try_update(MetaState::restart) else {
        return;
    };
    let generations: [u64; BOARD_COUNT] =
        std::array::from_fn(|i| boards[i].try_update(BoardState::begin_create).unwrap_or_default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let results = crate::net::api::create_sessions(BOARD_COUNT).await;
        let failed = results.iter().filter(|r| r.is_err()).count();
        for ((board, generation), result) in boards.into_iter().zip(generations).zip(results) {
            board.try_update(|b| b.finish_create(generation, result));
        }
        if meta.try_update(|m| m.finish_round(round)) == Some(true) {
            log::info!("meta round {round} settled: {failed} of {BOARD_COUNT} boards failed");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (round, generations);
}
