//! Error taxonomy for backend calls.
//!
//! Every variant renders to the single message string shown in the UI; no
//! variant drives different recovery behavior.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Which backend call failed, used to label server errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiAction {
    Create,
    Move,
}

impl std::fmt::Display for ApiAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Create => "Create",
            Self::Move => "Move",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response without a usable `detail`.
    #[error("{action} failed: {status}")]
    Server { action: ApiAction, status: u16 },

    /// Non-2xx response carrying the backend's own explanation.
    #[error("{0}")]
    Validation(String),

    /// A 2xx response whose body was not a valid session.
    #[error("invalid response: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Classify a non-2xx response from its status and raw body text.
///
/// Only a rejected move consults the body: a string `detail` becomes a
/// validation error carrying that text. Failed creates, and moves without a
/// usable detail (empty body, non-JSON, structured detail), are server errors.
pub fn classify_failure(action: ApiAction, status: u16, body: &str) -> ApiError {
    if action == ApiAction::Create {
        return ApiError::Server { action, status };
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message().map(str::to_owned))
        .map_or(ApiError::Server { action, status }, ApiError::Validation)
}
