use std::collections::HashMap;

use crate::analyzer::TextAnalyzer;
use crate::data_models::{ResultSet, Summary};

pub const NO_RESULTS_MESSAGE: &str = "検索結果が見つかりませんでした。";
pub const DESCRIPTION_LIMIT: usize = 100;
pub const MAX_KEYWORDS: usize = 5;
const ELLIPSIS: &str = "...";

/// Renders the digest for `results`: header, one entry per result in rank
/// order, and a trailing keyword line when any term recurs.
pub fn summarize(results: &ResultSet, query: &str) -> Summary {
    if results.is_empty() {
        return Summary::new(NO_RESULTS_MESSAGE.to_string());
    }

    let mut summary = format!(
        "「{query}」の検索結果サマリー:\n\n検索結果{}件から以下の情報が得られました:\n",
        results.len()
    );

    for (i, result) in results.iter().enumerate() {
        summary.push_str(&format!(
            "{}. {}\n   概要: {}\n",
            i + 1,
            result.title(),
            truncate_description(result.description())
        ));
    }

    let keywords = extract_keywords(results, query);
    if !keywords.is_empty() {
        summary.push_str(&format!("\n関連キーワード: {}", keywords.join(", ")));
    }

    Summary::new(summary)
}

/// First [`DESCRIPTION_LIMIT`] characters plus `...`, or the text unchanged
/// when it already fits. The cut ignores word boundaries.
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &description[..cut]),
        None => description.to_string(),
    }
}

/// Terms seen at least twice across the query, titles and descriptions.
///
/// Ordered by first appearance in the scan, not by count, and capped at
/// [`MAX_KEYWORDS`].
pub fn extract_keywords(results: &ResultSet, query: &str) -> Vec<String> {
    let mut corpus = format!("{query} ");
    for result in results {
        corpus.push_str(result.title());
        corpus.push(' ');
        corpus.push_str(result.description());
        corpus.push(' ');
    }

    let analyzer = TextAnalyzer::keywords();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    for token in analyzer.analyze(&corpus) {
        let count = counts.entry(token.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(token);
        }
        *count += 1;
    }

    first_seen
        .into_iter()
        .filter(|t| counts.get(t).copied().unwrap_or(0) >= 2)
        .take(MAX_KEYWORDS)
        .collect()
}
