//! HTML pages. Every piece of free text goes through [`html_escape`] before it
//! is embedded, since titles and descriptions come from an untrusted page.

use html_escape::{encode_double_quoted_attribute, encode_safe};

use super::models::ResultsPage;

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; background-color: #f5f5f5; }
    .container { background-color: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
    h1 { color: #4285f4; text-align: center; margin-bottom: 30px; }
    .search-form, .search-again { text-align: center; margin-bottom: 30px; }
    input[type="text"] { width: 400px; padding: 12px; font-size: 16px; border: 2px solid #ddd; border-radius: 25px; outline: none; }
    button { padding: 12px 24px; margin-left: 10px; background-color: #4285f4; color: white; border: none; border-radius: 25px; cursor: pointer; font-size: 16px; }
    .query { font-size: 24px; margin-bottom: 20px; color: #333; }
    .error { color: #d93025; background-color: #fce8e6; padding: 15px; border-radius: 5px; margin: 20px 0; }
    .summary { background-color: #e8f0fe; padding: 20px; border-radius: 8px; margin-bottom: 30px; border-left: 4px solid #4285f4; white-space: pre-line; }
    .result-item { margin-bottom: 20px; padding: 15px; border: 1px solid #ddd; border-radius: 8px; background-color: #fafafa; }
    .result-title { font-size: 18px; font-weight: bold; margin-bottom: 5px; }
    .result-title a { color: #1a0dab; text-decoration: none; }
    .result-url { color: #006621; font-size: 14px; margin-bottom: 8px; word-break: break-all; }
    .result-description { color: #545454; line-height: 1.4; }
"#;

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="container">
        <h1>🔍 Google検索サマリー</h1>
{body}
    </div>
</body>
</html>
"#
    )
}

pub fn render_home() -> String {
    page(
        "Google検索サマリー",
        r#"        <form class="search-form" action="/search" method="GET">
            <input type="text" name="q" placeholder="検索キーワードを入力してください..." required>
            <button type="submit">検索</button>
        </form>"#,
    )
}

/// Only http(s) targets become links; anything else points nowhere.
fn safe_href(url: &str) -> &str {
    let lower = url.trim_start().to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url
    } else {
        "#"
    }
}

pub fn render_results(data: &ResultsPage) -> String {
    let mut body = format!(
        r#"        <div class="search-again"><a href="/">新しい検索</a></div>
        <div class="query">検索キーワード: "{}"</div>
"#,
        encode_safe(&data.query)
    );

    if let Some(error) = &data.error {
        body.push_str(&format!(
            "        <div class=\"error\">{}</div>\n",
            encode_safe(error)
        ));
    }

    if let Some(summary) = &data.summary {
        body.push_str(&format!(
            "        <div class=\"summary\"><h3>📝 サマリー</h3>{}</div>\n",
            encode_safe(summary.as_str())
        ));
    }

    if let Some(results) = data.results.as_ref().filter(|r| !r.is_empty()) {
        body.push_str(&format!(
            r#"        <div class="results">
            <h3>🔍 検索結果 ({}件)</h3>
"#,
            results.len()
        ));
        for result in results {
            body.push_str(&format!(
                r#"            <div class="result-item">
                <div class="result-title"><a href="{}" target="_blank">{}</a></div>
                <div class="result-url">{}</div>
                <div class="result-description">{}</div>
            </div>
"#,
                encode_double_quoted_attribute(safe_href(result.url())),
                encode_safe(result.title()),
                encode_safe(result.url()),
                encode_safe(result.description()),
            ));
        }
        body.push_str("        </div>");
    }

    page("検索結果 - Google検索サマリー", &body)
}
