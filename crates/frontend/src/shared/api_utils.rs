//! API utilities for frontend-backend communication

/// Address of the log API when no override is compiled in.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the base URL for API requests
///
/// Fixed at build time: `LOG_CONSOLE_API_URL` if it was set when the crate
/// was compiled, [`DEFAULT_API_BASE`] otherwise. Never ends with `/`.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_base;
///
/// let url = format!("{}/logs/", api_base());
/// ```
pub fn api_base() -> String {
    option_env!("LOG_CONSOLE_API_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}
