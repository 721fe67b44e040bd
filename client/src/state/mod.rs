//! Client-side game state.
//!
//! DESIGN
//! ======
//! `board` is the per-board presenter state machine, `meta` aggregates nine
//! boards into the outcome grid, and `outcome` is the value that flows from
//! the former to the latter.

pub mod board;
pub mod meta;
pub mod outcome;
