//! API utilities for talking to the summarizer service

use crate::shared::config::ApiConfig;

/// Get the base URL for API requests
///
/// Uses `api.base` when set. Otherwise constructs it from the current window
/// location with the configured port.
///
/// # Returns
/// - API base URL like "http://localhost:5000"
/// - Empty string if neither is available
pub fn api_base(api: &ApiConfig) -> String {
    if !api.base.is_empty() {
        return api.base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&config.api, "/process_video");
/// ```
pub fn api_url(api: &ApiConfig, path: &str) -> String {
    format!("{}{}", api_base(api), path)
}
