//! API utilities for frontend-backend communication
//!
//! Resolves the sales backend base URL from the page's hostname.

/// Backend used when the dashboard is served from the developer's machine
pub const LOCAL_API_BASE: &str = "http://localhost:5000";

/// Deployed backend used from any other host
pub const REMOTE_API_BASE: &str = "https://sales-backend-p9wp.onrender.com";

/// Pick the backend for a given page hostname.
///
/// # Example
/// ```ignore
/// assert_eq!(base_for_host("localhost"), LOCAL_API_BASE);
/// ```
pub fn base_for_host(hostname: &str) -> &'static str {
    match hostname {
        "localhost" | "127.0.0.1" => LOCAL_API_BASE,
        _ => REMOTE_API_BASE,
    }
}

/// Get the base URL for API requests
///
/// A `SALES_API_BASE` variable set at build time wins over hostname detection.
pub fn api_base() -> String {
    if let Some(base) = option_env!("SALES_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }

    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    base_for_host(&hostname).to_string()
}

/// Build a full API URL from a path (and optional query string)
///
/// # Example
/// ```ignore
/// let url = api_url("/api/sales/filters");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_hosts() {
        assert_eq!(base_for_host("localhost"), LOCAL_API_BASE);
        assert_eq!(base_for_host("127.0.0.1"), LOCAL_API_BASE);
    }

    #[test]
    fn test_any_other_host_is_remote() {
        assert_eq!(base_for_host("sales.example.com"), REMOTE_API_BASE);
        assert_eq!(base_for_host(""), REMOTE_API_BASE);
    }
}
