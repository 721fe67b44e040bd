//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/async concerns from page and component
//! logic so the state machines stay testable on the host target.

pub mod session_tasks;
