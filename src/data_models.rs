use std::fmt;

use serde::Serialize;

/// Upper bound on the number of results carried through the pipeline.
pub const MAX_RESULTS: usize = 5;

/// A single ranked hit. Title and url are never empty; the url is the
/// result's href taken verbatim (after redirect unwrapping), so it may be relative.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    title: String,
    url: String,
    description: String,
}

impl SearchResult {
    /// Returns `None` when either the title or the url is empty.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Option<SearchResult> {
        let title = title.into();
        let url = url.into();
        if title.is_empty() || url.is_empty() {
            return None;
        }
        Some(SearchResult {
            title,
            url,
            description: description.into(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Ordered, bounded list of results. Order is presentation rank.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct ResultSet {
    results: Vec<SearchResult>,
}

impl ResultSet {
    /// Builds a set from ranked results, dropping anything past [`MAX_RESULTS`].
    pub fn new(mut results: Vec<SearchResult>) -> ResultSet {
        results.truncate(MAX_RESULTS);
        ResultSet { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn as_slice(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchResult> {
        self.results.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a SearchResult;
    type IntoIter = std::slice::Iter<'a, SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Formatted digest text produced by the summarizer.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Summary(String);

impl Summary {
    pub fn new(text: String) -> Summary {
        Summary(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which path produced a result set.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    Upstream,
    Fallback,
}

impl fmt::Display for ResultSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultSource::Upstream => f.write_str("upstream"),
            ResultSource::Fallback => f.write_str("fallback"),
        }
    }
}

/// Everything a renderer needs for one query.
#[derive(Serialize, Debug, Clone)]
pub struct SearchOutcome {
    pub query: String,
    pub results: ResultSet,
    pub summary: Summary,
    pub source: ResultSource,
}
