//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns the board signals for its route and delegates rendering
//! to `components`.

pub mod classic;
pub mod meta_game;
