//! Wire DTOs for the tic-tac-toe backend REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads exactly so the session a
//! presenter holds is always the backend's authoritative view. The client
//! never edits a `Session` locally; it only replaces it with a newer response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Number of cells on a board.
pub const CELL_COUNT: usize = 9;

/// A player mark. Serialized as `"X"` / `"O"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Display text for the mark.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One backend-tracked game and its current board/turn/outcome state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque identifier issued by the backend.
    pub id: String,
    /// Row-major cells; `None` is empty.
    pub board: [Option<Mark>; CELL_COUNT],
    /// Mark that moves next.
    pub current_player: Mark,
    /// Winning mark once the game is won.
    #[serde(default)]
    pub winner: Option<Mark>,
    #[serde(default)]
    pub is_draw: bool,
    /// Human-readable status line supplied by the backend.
    #[serde(default)]
    pub status: String,
}

impl Session {
    /// Mark at `index`, or `None` for an empty or out-of-range cell.
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.board.get(index).copied().flatten()
    }

    /// True once the backend reports a winner or a draw.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }
}

/// Body of `POST /tictactoe/new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NewGameRequest {
    pub starting_player: Mark,
}

/// Body of `POST /tictactoe/{id}/move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MoveRequest {
    pub index: usize,
}

/// Error payload returned with a non-2xx status.
///
/// `detail` is only meaningful when it is a string; validation failures from
/// some backends carry a structured list instead, which is treated as absent.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The human-readable detail, if the backend sent one.
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
