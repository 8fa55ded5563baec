use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;

use crate::config::SearchConfig;
use crate::error::{FetchError, SearchError};

/// Anything that can turn a query into raw result-page markup.
pub trait MarkupSource: Send + Sync {
    fn fetch(&self, query: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Single-shot HTTP fetcher for the upstream search page.
///
/// One GET per call, no retries. Every failure mode (timeout, connection
/// error, non-200) comes back as a [`FetchError`].
pub struct HttpFetcher {
    client: reqwest::Client,
    search_url: String,
    result_hint: String,
}

impl HttpFetcher {
    pub fn new(config: &SearchConfig) -> Result<HttpFetcher, SearchError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(HttpFetcher {
            client,
            search_url: config.search_url.clone(),
            result_hint: config.result_hint.to_string(),
        })
    }
}

impl MarkupSource for HttpFetcher {
    async fn fetch(&self, query: &str) -> Result<String, FetchError> {
        let res = self
            .client
            .get(&self.search_url)
            .query(&[("q", query), ("num", self.result_hint.as_str())])
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = res.text().await?;
        tracing::debug!(bytes = body.len(), "upstream page received");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_default_config() {
        assert!(HttpFetcher::new(&SearchConfig::default()).is_ok());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SearchConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            HttpFetcher::new(&config),
            Err(SearchError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_transport_error_does_not_carry_query() {
        let config = SearchConfig {
            search_url: "http://127.0.0.1:9/search".into(),
            timeout_secs: 2,
            ..Default::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        let err = fetcher.fetch("secret medical query").await.unwrap_err();
        let message = err.to_string();
        assert!(!message.contains("secret"), "{message}");
        assert!(!message.contains("q="), "{message}");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_fetch_error() {
        let config = SearchConfig {
            search_url: "http://127.0.0.1:9/search".into(),
            timeout_secs: 2,
            ..Default::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        let result = fetcher.fetch("rust").await;
        assert!(matches!(
            result,
            Err(FetchError::Transport(_)) | Err(FetchError::Timeout)
        ));
    }
}
