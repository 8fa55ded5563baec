use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use std::time::Instant;

use crate::pipeline::DefaultPipeline;

use super::models::{ResultsPage, SearchParams, SearchRequest, SearchResponse};
use super::templates;

pub async fn home_handler() -> Html<String> {
    Html(templates::render_home())
}

pub async fn search_page_handler(
    State(pipeline): State<Arc<DefaultPipeline>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = params.q.unwrap_or_default();
    if query.is_empty() {
        return Redirect::to("/").into_response();
    }

    let mut page = ResultsPage {
        query,
        ..Default::default()
    };
    match pipeline.handle(&page.query).await {
        Ok(outcome) => {
            page.results = Some(outcome.results);
            page.summary = Some(outcome.summary);
        }
        Err(e) => {
            tracing::error!("search failed: {e}");
            page.error = Some(format!("検索エラー: {e}"));
        }
    }

    Html(templates::render_results(&page)).into_response()
}

pub async fn search_handler(
    State(pipeline): State<Arc<DefaultPipeline>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let start = Instant::now();

    if request.query.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Query cannot be empty".to_string()));
    }

    let outcome = pipeline.handle(&request.query).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Search error: {}", e),
        )
    })?;

    let total_results = outcome.results.len();
    let processing_time_ms = start.elapsed().as_millis();

    Ok(Json(SearchResponse {
        query: outcome.query,
        results: outcome.results,
        summary: outcome.summary,
        source: outcome.source,
        total_results,
        processing_time_ms,
    }))
}
