use std::time::Duration;

/// Default arXiv query API endpoint
pub const DEFAULT_BASE_URL: &str = "http://export.arxiv.org/api/query";

/// Configuration for the arXiv client
///
/// # Example
///
/// ```
/// use arxiv_client_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-research-tool/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Option<String>,
    user_agent: Option<String>,
    /// Timeout applied to every HTTP request
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Override the query API base URL (useful for testing against a mock server)
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header value
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Get the effective query API base URL
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Get the effective User-Agent value
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("arxiv-client-rs/{}", env!("CARGO_PKG_VERSION")))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
