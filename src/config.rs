use std::env;

/// Compiled-in prediction endpoint, matching the local development server.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// Environment variable that overrides the endpoint.
pub const ENDPOINT_ENV: &str = "NEWSPROBE_ENDPOINT";

/// Returns the prediction endpoint URL.
pub fn default_endpoint() -> String {
    // 1. Check environment variable
    if let Ok(url) = env::var(ENDPOINT_ENV) {
        if !url.trim().is_empty() {
            return url;
        }
    }

    // 2. Fall back to the compiled-in default
    DEFAULT_ENDPOINT.to_string()
}
