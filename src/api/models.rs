use serde::{Deserialize, Serialize};

use crate::data_models::{ResultSet, ResultSource, Summary};

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Query string of `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: ResultSet,
    pub summary: Summary,
    pub source: ResultSource,
    pub total_results: usize,
    pub processing_time_ms: u128,
}

/// Everything the result page template shows.
#[derive(Debug, Default)]
pub struct ResultsPage {
    pub query: String,
    pub results: Option<ResultSet>,
    pub summary: Option<Summary>,
    pub error: Option<String>,
}
