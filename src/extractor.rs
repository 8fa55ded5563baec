use scraper::{ElementRef, Html, Selector};

use crate::data_models::{MAX_RESULTS, ResultSet, SearchResult};
use crate::error::ExtractError;

/// Fewer accepted results than this and the page is treated as unusable.
pub const MIN_RESULTS: usize = 3;

const REDIRECT_PREFIX: &str = "/url?q=";

/// Turns a result page into a ranked [`ResultSet`].
pub trait ResultExtractor: Send + Sync {
    fn extract(&self, markup: &str) -> Result<ResultSet, ExtractError>;
}

/// Structural heuristics for Google's HTML result page.
///
/// Each `div.g` container is a candidate. A candidate is kept when the joined
/// text of all its `h3` headings is non-empty and it has an `a[href]` target;
/// the description is the text of its last `span` and may be empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleExtractor;

struct Selectors {
    container: Selector,
    title: Selector,
    link: Selector,
    description: Selector,
}

impl Selectors {
    fn new() -> Result<Selectors, ExtractError> {
        Ok(Selectors {
            container: parse_selector("div.g")?,
            title: parse_selector("h3")?,
            link: parse_selector("a[href]")?,
            description: parse_selector("span")?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Parse(format!("invalid selector {css}: {e:?}")))
}

impl GoogleExtractor {
    fn parse_candidate(candidate: ElementRef<'_>, sel: &Selectors) -> Option<SearchResult> {
        let title = candidate
            .select(&sel.title)
            .flat_map(|h| h.text())
            .collect::<String>()
            .trim()
            .to_string();
        let href = candidate
            .select(&sel.link)
            .next()
            .and_then(|a| a.value().attr("href"))?;
        let description = candidate
            .select(&sel.description)
            .last()
            .map(|d| d.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        SearchResult::new(title, clean_url(href), description)
    }
}

impl ResultExtractor for GoogleExtractor {
    fn extract(&self, markup: &str) -> Result<ResultSet, ExtractError> {
        if markup.trim().is_empty() {
            return Err(ExtractError::Parse("empty document".into()));
        }
        let sel = Selectors::new()?;
        let document = Html::parse_document(markup);

        let mut results = Vec::with_capacity(MAX_RESULTS);
        for candidate in document.select(&sel.container) {
            if results.len() >= MAX_RESULTS {
                break;
            }
            if let Some(result) = Self::parse_candidate(candidate, &sel) {
                results.push(result);
            }
        }

        tracing::debug!(found = results.len(), "extracted results from upstream page");
        if results.len() < MIN_RESULTS {
            return Err(ExtractError::Insufficient {
                found: results.len(),
            });
        }
        Ok(ResultSet::new(results))
    }
}

/// Unwraps `/url?q=<target>&...` redirect links; any other href is returned as is.
pub fn clean_url(href: &str) -> String {
    if !href.starts_with(REDIRECT_PREFIX) {
        return href.to_string();
    }
    // parse from the start of the query string so `q` is read like any other pair
    let query = href["/url?".len()..].split('#').next().unwrap_or_default();
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}
