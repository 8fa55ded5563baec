use sift::analyzer::{TextAnalyzer, is_stop_word};
use sift::data_models::{ResultSet, SearchResult};
use sift::fallback::synthesize;
use sift::summarizer::{extract_keywords, summarize, truncate_description};

fn result(title: &str, url: &str, description: &str) -> SearchResult {
    SearchResult::new(title, url, description).unwrap()
}

fn go_results() -> ResultSet {
    ResultSet::new(vec![
        result(
            "Go言語の基礎",
            "https://example.com/go-basics",
            "Go言語は、Googleが開発したプログラミング言語です。シンプルで効率的な開発が可能です。",
        ),
        result(
            "Go言語チュートリアル",
            "https://example.com/go-tutorial",
            "初心者向けのGo言語チュートリアル。基本的な文法から応用まで学べます。",
        ),
    ])
}

#[cfg(test)]
mod summary_tests {
    use super::*;

    #[test]
    fn test_go_scenario() {
        let summary = summarize(&go_results(), "Go言語");
        let text = summary.as_str();

        assert!(text.starts_with("「Go言語」の検索結果サマリー:\n\n"));
        assert!(text.contains("検索結果2件から以下の情報が得られました:"));
        assert!(text.contains("1. Go言語の基礎\n"));
        assert!(text.contains("2. Go言語チュートリアル\n"));
        assert!(text.chars().count() >= 50);
    }

    #[test]
    fn test_contains_query_and_marker_for_fallback_sets() {
        for query in ["rust", "東京 天気", "a"] {
            let summary = summarize(&synthesize(query), query);
            assert!(summary.as_str().contains(query));
            assert!(summary.as_str().contains("検索結果"));
        }
    }

    #[test]
    fn test_long_description_is_cut_in_digest() {
        let long = "x".repeat(150);
        let set = ResultSet::new(vec![result("Long", "https://example.com", &long)]);
        let summary = summarize(&set, "q");

        let expected_line = format!("   概要: {}...\n", "x".repeat(100));
        assert!(summary.as_str().contains(&expected_line));
        assert!(!summary.as_str().contains(&long));
    }

    #[test]
    fn test_truncation_ignores_word_boundaries() {
        let text = format!("{} tail", "word ".repeat(20));
        let cut = truncate_description(&text);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with(" ..."));
    }

    #[test]
    fn test_keyword_line_for_recurring_terms() {
        let summary = summarize(&synthesize("Kubernetes"), "Kubernetes");
        let text = summary.as_str();
        let line = text
            .lines()
            .find(|l| l.starts_with("関連キーワード: "))
            .expect("keyword line present");
        assert!(line.contains("kubernetes"));
        assert!(text.contains("\n\n関連キーワード: "));
    }

    #[test]
    fn test_no_keyword_line_without_repeats() {
        let set = ResultSet::new(vec![result("alpha", "https://example.com", "beta")]);
        let summary = summarize(&set, "gamma");
        assert!(!summary.as_str().contains("関連キーワード"));
    }
}

#[cfg(test)]
mod keyword_tests {
    use super::*;

    #[test]
    fn test_stop_words() {
        for w in ["の", "に", "は", "を", "が"] {
            assert!(is_stop_word(w), "'{w}' should be a stop word");
        }
        for w in ["a", "an", "the", "and", "or"] {
            assert!(is_stop_word(w), "'{w}' should be a stop word");
        }
        for w in ["Go", "言語", "プログラミング", "development"] {
            assert!(!is_stop_word(w), "'{w}' should not be a stop word");
        }
    }

    #[test]
    fn test_keywords_bounded_and_recurring() {
        let queries = ["Go言語", "rust programming", "機械学習 入門", "x"];
        for query in queries {
            let results = synthesize(query);
            let keywords = extract_keywords(&results, query);
            assert!(keywords.len() <= 5);

            let mut corpus = format!("{query} ");
            for r in &results {
                corpus.push_str(&format!("{} {} ", r.title(), r.description()));
            }
            let tokens = TextAnalyzer::keywords().analyze(&corpus);
            for k in &keywords {
                let seen = tokens.iter().filter(|t| *t == k).count();
                assert!(seen >= 2, "{k} seen {seen} times");
            }
        }
    }

    #[test]
    fn test_punctuation_is_removed_before_counting() {
        let set = ResultSet::new(vec![
            result("Tokio!", "https://example.com/1", "(tokio)"),
            result("async-runtime", "https://example.com/2", "asyncruntime"),
        ]);
        assert_eq!(extract_keywords(&set, "q"), vec!["tokio", "asyncruntime"]);
    }

    #[test]
    fn test_case_folded_before_counting() {
        let set = ResultSet::new(vec![result("Rust", "https://example.com", "RUST rust")]);
        assert_eq!(extract_keywords(&set, "q"), vec!["rust"]);
    }
}
