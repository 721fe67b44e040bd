//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render boards and the outcome summary from signals handed down
//! by the pages; they never create sessions on their own except on Retry.

pub mod board_grid;
pub mod meta_summary;
