//! Resolver list download.

use crate::config::FetchConfig;
use crate::source::DocumentSource;
use async_trait::async_trait;
use dohcat_core::{CatalogError, Result};
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::Client as HttpClient;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Downloads resolver list documents over HTTPS.
///
/// Redirects are followed by hand so the chain length is bounded by
/// [`FetchConfig::max_redirects`] and every hop is logged.
#[derive(Clone)]
pub struct ResolverListFetcher {
    inner: Arc<FetcherInner>,
}

struct FetcherInner {
    http: HttpClient,
    config: FetchConfig,
}

impl ResolverListFetcher {
    /// Create a fetcher with the given configuration
    pub fn new(config: FetchConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .redirect(Policy::none())
            .gzip(true)
            .build()
            .map_err(|e| CatalogError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner: Arc::new(FetcherInner { http, config }),
        })
    }

    /// Create a fetcher with default settings
    pub fn with_defaults() -> Result<Self> {
        Self::new(FetchConfig::default())
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.inner.config
    }

    /// GET `url`, following redirects, and return the body as text
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let mut current =
            Url::parse(url).map_err(|e| CatalogError::InvalidUrl(format!("{url}: {e}")))?;
        let mut redirects = 0usize;

        loop {
            debug!(url = %current, "GET request");

            let response = self
                .inner
                .http
                .get(current.clone())
                .send()
                .await
                .map_err(|e| self.transport_error(&current, &e))?;

            let status = response.status();

            if status.is_redirection() {
                if let Some(location) = response.headers().get(LOCATION) {
                    if redirects >= self.inner.config.max_redirects {
                        return Err(CatalogError::TooManyRedirects {
                            limit: self.inner.config.max_redirects,
                            url: current.to_string(),
                        });
                    }

                    let location = location.to_str().map_err(|e| {
                        CatalogError::InvalidUrl(format!("bad Location from {current}: {e}"))
                    })?;
                    let next = current.join(location).map_err(|e| {
                        CatalogError::InvalidUrl(format!("{location} (from {current}): {e}"))
                    })?;

                    debug!(from = %current, to = %next, status = status.as_u16(), "following redirect");
                    current = next;
                    redirects += 1;
                    continue;
                }
            }

            if !status.is_success() {
                return Err(CatalogError::HttpStatus {
                    url: current.to_string(),
                    code: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or_default().to_string(),
                });
            }

            let body = response
                .text()
                .await
                .map_err(|e| self.transport_error(&current, &e))?;

            info!(url = %current, bytes = body.len(), redirects, "downloaded resolver list");
            return Ok(body);
        }
    }

    /// Classify a reqwest failure
    fn transport_error(&self, url: &Url, err: &reqwest::Error) -> CatalogError {
        if err.is_timeout() {
            CatalogError::Timeout {
                url: url.to_string(),
                secs: self.inner.config.timeout.as_secs(),
            }
        } else if err.is_connect() {
            CatalogError::Connection(format!("{url}: {err}"))
        } else {
            CatalogError::Http(format!("{url}: {err}"))
        }
    }
}

#[async_trait]
impl DocumentSource for ResolverListFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.get_text(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher(max_redirects: usize) -> ResolverListFetcher {
        ResolverListFetcher::new(
            FetchConfig::new()
                .timeout(Duration::from_secs(5))
                .max_redirects(max_redirects),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/public-resolvers.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("## Example\nsdns://AgA\n"))
            .expect(1)
            .mount(&server)
            .await;

        let body = fetcher(10)
            .get_text(&format!("{}/public-resolvers.md", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "## Example\nsdns://AgA\n");
    }

    #[tokio::test]
    async fn test_follows_redirect_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old.md"))
            .respond_with(
                ResponseTemplate::new(301)
                    .insert_header("Location", format!("{}/new.md", server.uri()).as_str()),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
            .expect(1)
            .mount(&server)
            .await;

        let body = fetcher(10)
            .get_text(&format!("{}/old.md", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "moved");
    }

    #[tokio::test]
    async fn test_follows_relative_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/list.md"))
            .respond_with(ResponseTemplate::new(302).insert_header("Location", "/v3/list.md"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v3/list.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("v3"))
            .expect(1)
            .mount(&server)
            .await;

        let body = fetcher(10)
            .get_text(&format!("{}/v2/list.md", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "v3");
    }

    #[tokio::test]
    async fn test_redirect_loop_is_capped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/loop"))
            .respond_with(ResponseTemplate::new(302).insert_header("Location", "/loop"))
            // initial request plus three followed redirects
            .expect(4)
            .mount(&server)
            .await;

        let err = fetcher(3)
            .get_text(&format!("{}/loop", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::TooManyRedirects { limit: 3, .. }));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_error_status_includes_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = fetcher(10)
            .get_text(&format!("{}/missing.md", server.uri()))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(404));
        assert!(err.to_string().contains("404 Not Found"));
    }

    #[tokio::test]
    async fn test_redirect_without_location_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(302))
            .mount(&server)
            .await;

        let err = fetcher(10).get_text(&server.uri()).await.unwrap_err();
        assert_eq!(err.status_code(), Some(302));
    }

    #[tokio::test]
    async fn test_timeout_is_distinct() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let slow = ResolverListFetcher::new(FetchConfig::new().timeout(Duration::from_millis(200)))
            .unwrap();
        let err = slow.get_text(&server.uri()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let err = fetcher(10).get_text("not a url").await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_document_source_impl() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let source: Box<dyn DocumentSource> = Box::new(fetcher(10));
        assert_eq!(source.fetch_text(&server.uri()).await.unwrap(), "ok");
    }
}
