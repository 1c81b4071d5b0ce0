//! Environment-backed configuration.

/// Base URL used when `TODO_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Process-lifetime configuration for the todo API.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the todo API, without a trailing path.
    pub base_url: String,
}

impl Config {
    /// Read the base URL from `TODO_API_URL`, falling back to the default.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("TODO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
