//! Where the order backend lives

use super::config::{BACKEND_URL, DEFAULT_API_PORT};

/// Backend origin without a trailing slash.
///
/// A non-blank `BACKEND_URL` from build time wins; otherwise the page host is
/// reused with [`DEFAULT_API_PORT`]. Empty outside a browser window.
pub fn api_base() -> String {
    if let Some(url) = BACKEND_URL.map(str::trim).filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }

    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return String::new();
    };
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, host, DEFAULT_API_PORT)
}

/// `path` is expected to start with `/`, e.g. `api_url("/shop/orders")`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
