//! Networking modules for the tic-tac-toe backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls, `config` resolves the backend base URL,
//! `error` classifies failures and `types` defines the wire schema.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
