//! Backend base URL resolution.
//!
//! Resolution order: the `<meta name="tictactoe-api-url">` tag the host
//! writes into the SSR shell, then the compile-time `TICTACTOE_API_URL`,
//! then [`DEFAULT_API_BASE`]. Blank values fall through to the next source.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Local fallback used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Name of the shell meta tag carrying the runtime API base.
pub const API_BASE_META_NAME: &str = "tictactoe-api-url";

/// Trim whitespace and trailing slashes; `None` if nothing remains.
pub fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Pick the first usable base from the candidates, else the default.
pub fn resolve_base<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .find_map(normalize_base)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_owned())
}

/// The API base for the running client.
pub fn api_base() -> String {
    let runtime = runtime_meta_base();
    resolve_base([runtime.as_deref(), option_env!("TICTACTOE_API_URL")])
}

fn runtime_meta_base() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{API_BASE_META_NAME}\"]");
        let element = document.query_selector(&selector).ok()??;
        element.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
