use crate::config::SearchConfig;
use crate::data_models::{ResultSet, ResultSource, SearchOutcome};
use crate::error::{ExtractError, FetchError, SearchError};
use crate::extractor::{GoogleExtractor, ResultExtractor};
use crate::fallback::synthesize;
use crate::fetcher::{HttpFetcher, MarkupSource};
use crate::summarizer::summarize;

/// Fetch, extract, fall back when needed, summarize.
///
/// Holds no per-request state, so one instance is shared across every
/// request handler.
pub struct SearchPipeline<S, E> {
    source: S,
    extractor: E,
}

pub type DefaultPipeline = SearchPipeline<HttpFetcher, GoogleExtractor>;

impl DefaultPipeline {
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self::new(HttpFetcher::new(config)?, GoogleExtractor))
    }
}

enum Recoverable {
    Fetch(FetchError),
    Extract(ExtractError),
}

impl<S: MarkupSource, E: ResultExtractor> SearchPipeline<S, E> {
    pub fn new(source: S, extractor: E) -> Self {
        Self { source, extractor }
    }

    /// Runs the whole pipeline for one query. The caller is expected to
    /// reject empty queries before calling this.
    ///
    /// Upstream trouble never surfaces here: fetch and extraction failures
    /// are replaced by the synthetic result set.
    pub async fn handle(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        tracing::debug!(query, "handling search");

        let (results, source) = match self.upstream_results(query).await {
            Ok(results) => (results, ResultSource::Upstream),
            Err(Recoverable::Fetch(e)) => {
                tracing::warn!("upstream fetch failed, using fallback: {e}");
                (synthesize(query), ResultSource::Fallback)
            }
            Err(Recoverable::Extract(e)) => {
                tracing::warn!("upstream page unusable, using fallback: {e}");
                (synthesize(query), ResultSource::Fallback)
            }
        };

        if results.is_empty() {
            return Err(SearchError::Internal(format!(
                "no results produced for query {query}"
            )));
        }

        let summary = summarize(&results, query);
        tracing::info!(results = results.len(), %source, "search completed");

        Ok(SearchOutcome {
            query: query.to_string(),
            results,
            summary,
            source,
        })
    }

    async fn upstream_results(&self, query: &str) -> Result<ResultSet, Recoverable> {
        let markup = self
            .source
            .fetch(query)
            .await
            .map_err(Recoverable::Fetch)?;
        self.extractor
            .extract(&markup)
            .map_err(Recoverable::Extract)
    }
}
