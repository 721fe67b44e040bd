//! Meta-board aggregation state.
//!
//! DESIGN
//! ======
//! The meta page owns nine independent boards addressed by index. Children
//! never touch this state directly; each one emits an [`OutcomeEvent`] tagged
//! with its index when its game ends and the page applies it here. The grid is
//! a display aggregate only: no win condition is evaluated over it.

#[cfg(test)]
#[path = "meta_test.rs"]
mod meta_test;

use super::outcome::Outcome;

/// Number of nested boards on the meta page.
pub const BOARD_COUNT: usize = 9;

/// A child board's terminal outcome, tagged with its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutcomeEvent {
    pub index: usize,
    pub outcome: Outcome,
}

/// Nine outcomes, index-aligned with the nested boards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetaOutcomeGrid([Outcome; BOARD_COUNT]);

impl MetaOutcomeGrid {
    /// Outcome at `index`; out-of-range slots read as undecided.
    pub fn get(&self, index: usize) -> Outcome {
        self.0.get(index).copied().unwrap_or_default()
    }

    /// Record a child outcome. Returns `true` if the slot changed.
    ///
    /// Re-applying the same outcome is a no-op; a different one overwrites.
    /// Undecided reports and out-of-range indices are ignored so a slot only
    /// returns to undecided through [`MetaOutcomeGrid::clear`].
    pub fn apply(&mut self, event: OutcomeEvent) -> bool {
        if !event.outcome.is_terminal() {
            return false;
        }
        let Some(slot) = self.0.get_mut(event.index) else {
            return false;
        };
        if *slot == event.outcome {
            return false;
        }
        *slot = event.outcome;
        true
    }

    pub fn clear(&mut self) {
        self.0 = [Outcome::Undecided; BOARD_COUNT];
    }

    #[cfg(test)]
    pub fn cells(&self) -> &[Outcome; BOARD_COUNT] {
        &self.0
    }

    pub fn decided_count(&self) -> usize {
        self.0.iter().filter(|o| o.is_terminal()).count()
    }
}

/// Page-level aggregation: the outcome grid plus the 9-way creation round.
#[derive(Clone, Debug, Default)]
pub struct MetaState {
    pub grid: MetaOutcomeGrid,
    loading: bool,
    round: u64,
}

impl MetaState {
    /// Begin a (re)start: clear the grid and mark the round as loading.
    ///
    /// Returns the round the eventual completion must carry.
    pub fn restart(&mut self) -> u64 {
        self.round += 1;
        self.loading = true;
        self.grid.clear();
        self.round
    }

    /// All creations of `round` have settled. Returns `false` if stale.
    pub fn finish_round(&mut self, round: u64) -> bool {
        if round != self.round || !self.loading {
            return false;
        }
        self.loading = false;
        true
    }

    /// Apply a child's report.
    pub fn on_child_outcome(&mut self, event: OutcomeEvent) -> bool {
        self.grid.apply(event)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True once at least one round has fully settled.
    pub fn is_ready(&self) -> bool {
        self.round > 0 && !self.loading
    }

    pub fn round(&self) -> u64 {
        self.round
    }
}

/// Row/column borders for summary cell `index` in a 3×3 layout.
///
/// Returns `(right, bottom)`: whether the cell draws a divider to its right
/// and below.
pub fn cell_dividers(index: usize) -> (bool, bool) {
    (index % 3 < 2, index < 6)
}
