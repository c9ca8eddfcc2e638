//! HTTP client abstraction for CarloSphere backend requests.

use reqwest::Client;
use std::time::Duration;

use crate::constants::DEFAULT_API_URL;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpConfig {
    /// Create config for a specific backend base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper: base URL joining, JSON headers, bearer auth.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    #[must_use]
    pub fn with_config(config: HttpConfig) -> Self {
        let inner = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self { inner, config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Absolute URL for a backend path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    /// Build a GET request with standard headers and optional bearer auth.
    pub fn get(&self, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let mut request = self
            .inner
            .get(self.url(path))
            .header("accept", "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Build a POST request with standard headers and optional bearer auth.
    pub fn post(&self, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let mut request = self
            .inner
            .post(self.url(path))
            .header("accept", "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::with_config(HttpConfig::default())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let config = HttpConfig::with_base_url("http://localhost:4000/");
        assert_eq!(config.base_url, "http://localhost:4000");
    }

    #[test]
    fn test_url_joins_path() {
        let client = HttpClient::with_config(HttpConfig::with_base_url("http://localhost:4000"));
        assert_eq!(client.url("/auth/login"), "http://localhost:4000/auth/login");
    }
}
