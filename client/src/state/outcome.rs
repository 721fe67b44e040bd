//! Terminal result of a single board.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use crate::net::types::{Mark, Session};

/// Result of one session: a winning mark, a draw, or still undecided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    #[default]
    Undecided,
    Won(Mark),
    Draw,
}

impl Outcome {
    /// Derive the outcome from the backend's view of a session.
    ///
    /// A winner takes precedence over the draw flag.
    pub fn of(session: &Session) -> Self {
        match (session.winner, session.is_draw) {
            (Some(mark), _) => Self::Won(mark),
            (None, true) => Self::Draw,
            (None, false) => Self::Undecided,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Undecided)
    }

    /// Summary-grid text: the winning mark, `draw`, or empty.
    pub fn label(self) -> &'static str {
        match self {
            Self::Undecided => "",
            Self::Won(mark) => mark.as_str(),
            Self::Draw => "draw",
        }
    }

    /// CSS modifier suffix for a finished board.
    pub fn css_modifier(self) -> Option<&'static str> {
        match self {
            Self::Undecided => None,
            Self::Won(Mark::X) => Some("won-x"),
            Self::Won(Mark::O) => Some("won-o"),
            Self::Draw => Some("draw"),
        }
    }
}
