//! Synthetic results used whenever the upstream page cannot be used.

use url::form_urlencoded;

use crate::data_models::{ResultSet, SearchResult};

/// Builds the fixed five-item fallback set for `query`.
///
/// Deterministic: the same query always gives the same results in the same
/// order. Never fails, even for an empty query.
pub fn synthesize(query: &str) -> ResultSet {
    let escaped: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();

    let templates = [
        (
            format!("「{query}」に関する包括的ガイド"),
            "https://example.com/guide".to_string(),
            format!(
                "{query}についての詳細な説明と使用方法を解説しています。初心者から上級者まで役立つ情報が満載です。"
            ),
        ),
        (
            format!("{query} - Wikipedia"),
            format!("https://ja.wikipedia.org/wiki/{escaped}"),
            format!("{query}の定義、歴史、関連情報についてのWikipediaの記事です。"),
        ),
        (
            format!("{query}の最新ニュース"),
            "https://news.example.com/".to_string(),
            format!("{query}に関する最新のニュースや動向をお届けします。"),
        ),
        (
            format!("{query}入門チュートリアル"),
            "https://tutorial.example.com/".to_string(),
            format!("初心者向けの{query}入門チュートリアル。ステップバイステップで学べます。"),
        ),
        (
            format!("{query}関連ツールとリソース"),
            "https://tools.example.com/".to_string(),
            format!("{query}に関連する便利なツールやリソースのコレクションです。"),
        ),
    ];

    // titles are non-empty literals and urls are fixed, so every template is kept
    let results = templates
        .into_iter()
        .filter_map(|(title, url, description)| SearchResult::new(title, url, description))
        .collect();
    ResultSet::new(results)
}
