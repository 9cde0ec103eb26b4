//! Fetcher configuration types.

use std::time::Duration;

/// Default location of the public resolver list
pub const DEFAULT_SOURCE_URL: &str =
    "https://download.dnscrypt.info/resolvers-list/v3/public-resolvers.md";

/// Environment variable that overrides [`DEFAULT_SOURCE_URL`]
pub const SOURCE_URL_ENV: &str = "DNSCRYPT_PUBLIC_RESOLVERS_URL";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default redirect depth
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Resolve the source URL from the environment, falling back to the default
#[must_use]
pub fn source_url_from_env() -> String {
    std::env::var(SOURCE_URL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string())
}

/// Configuration for [`ResolverListFetcher`](crate::ResolverListFetcher)
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Timeout for each request in the redirect chain
    pub timeout: Duration,

    /// Maximum number of redirects followed before failing
    pub max_redirects: usize,

    /// User-Agent header
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: format!("dohcat/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the redirect cap
    #[must_use]
    pub const fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}
