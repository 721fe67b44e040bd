//! Per-board presenter state.
//!
//! DESIGN
//! ======
//! `BoardState` is the state machine behind one rendered board:
//! `Uninitialized -> Loading -> Ready -> (Ready | Finished)`, back to
//! `Loading` on reset, or `Failed` when a session cannot be created.
//!
//! All transitions are plain methods so the guard rules (no request for a
//! filled cell, a finished game, or while another request is in flight) are
//! testable without a browser. Async callers hold a [`MoveTicket`] or a
//! generation number across the network call; results carrying a stale one
//! are dropped, which is how a reset discards in-flight responses.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::net::error::ApiError;
use crate::net::types::{CELL_COUNT, Mark, Session};

use super::outcome::Outcome;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoardPhase {
    #[default]
    Uninitialized,
    /// A create or move request is in flight.
    Loading,
    Ready,
    Finished,
    /// Session creation failed; only a reset leaves this phase.
    Failed,
}

/// Proof that a move request was admitted by the guards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveTicket {
    pub session_id: String,
    pub index: usize,
    generation: u64,
}

#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pub phase: BoardPhase,
    pub session: Option<Session>,
    pub error: Option<String>,
    reported: Option<Outcome>,
    generation: u64,
}

impl BoardState {
    /// Discard the current session and enter `Loading` for a fresh one.
    ///
    /// Returns the generation the eventual create result must carry.
    pub fn begin_create(&mut self) -> u64 {
        self.generation += 1;
        self.phase = BoardPhase::Loading;
        self.session = None;
        self.error = None;
        self.reported = None;
        self.generation
    }

    /// Apply a create result. Returns `false` if it belongs to an older reset.
    pub fn finish_create(&mut self, generation: u64, result: Result<Session, ApiError>) -> bool {
        if generation != self.generation
            || self.phase != BoardPhase::Loading
            || self.session.is_some()
        {
            return false;
        }
        match result {
            Ok(session) => self.accept(session),
            Err(e) => {
                self.phase = BoardPhase::Failed;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Whether a click on `index` would be forwarded to the backend.
    pub fn can_play(&self, index: usize) -> bool {
        self.phase == BoardPhase::Ready
            && index < CELL_COUNT
            && self
                .session
                .as_ref()
                .is_some_and(|s| !s.is_finished() && s.cell(index).is_none())
    }

    /// Admit a move and enter `Loading`, or `None` if the click is a no-op.
    pub fn begin_move(&mut self, index: usize) -> Option<MoveTicket> {
        if !self.can_play(index) {
            return None;
        }
        let session_id = self.session.as_ref()?.id.clone();
        self.phase = BoardPhase::Loading;
        self.error = None;
        Some(MoveTicket { session_id, index, generation: self.generation })
    }

    /// Apply a move result. Returns `false` if the ticket is stale.
    ///
    /// On error the board is left exactly as it was before the click.
    pub fn finish_move(&mut self, ticket: &MoveTicket, result: Result<Session, ApiError>) -> bool {
        let current = self.session.as_ref().map(|s| s.id.as_str());
        if ticket.generation != self.generation
            || self.phase != BoardPhase::Loading
            || current != Some(ticket.session_id.as_str())
        {
            return false;
        }
        match result {
            Ok(session) => self.accept(session),
            Err(e) => {
                self.phase = BoardPhase::Ready;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    fn accept(&mut self, session: Session) {
        self.phase = if session.is_finished() { BoardPhase::Finished } else { BoardPhase::Ready };
        self.error = None;
        self.session = Some(session);
    }

    /// Current outcome derived from the session.
    pub fn outcome(&self) -> Outcome {
        self.session.as_ref().map(Outcome::of).unwrap_or_default()
    }

    /// The terminal outcome if it has not been reported yet.
    ///
    /// Yields at most once per session; a reset re-arms it.
    pub fn take_outcome_report(&mut self) -> Option<Outcome> {
        let outcome = self.outcome();
        if !outcome.is_terminal() || self.reported.is_some() {
            return None;
        }
        self.reported = Some(outcome);
        Some(outcome)
    }

    /// Mark shown in `index`.
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.session.as_ref().and_then(|s| s.cell(index))
    }

    pub fn is_busy(&self) -> bool {
        self.phase == BoardPhase::Loading
    }

    /// True until the first session has arrived.
    pub fn is_waiting_for_session(&self) -> bool {
        self.session.is_none()
            && matches!(self.phase, BoardPhase::Uninitialized | BoardPhase::Loading)
    }

    /// Status line: the backend's text once a session exists.
    pub fn status_text(&self) -> String {
        match (&self.session, self.phase) {
            (Some(session), _) => session.status.clone(),
            (None, BoardPhase::Failed) => self.error.clone().unwrap_or_default(),
            (None, _) => "Loading...".to_owned(),
        }
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
