use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
static NON_WORD: OnceLock<Regex> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        HashSet::from([
            // Japanese particles
            "の",
            "に",
            "は",
            "を",
            "が",
            "で",
            "と",
            "から",
            "まで",
            "について",
            "による",
            // English function words
            "a",
            "an",
            "the",
            "and",
            "or",
            "but",
            "in",
            "on",
            "at",
            "to",
            "for",
            "of",
            "with",
            "by",
        ])
    })
}

fn get_non_word() -> &'static Regex {
    NON_WORD.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").expect("static pattern compiles"))
}

/// Exact-match stop word lookup. No case folding happens here.
pub fn is_stop_word(word: &str) -> bool {
    get_stop_words().contains(word)
}

/// A tokenizer receives a stream of characters, breaks it up into individual tokens (usually individual words),
/// and outputs a stream of tokens.
/// For instance, a whitespace tokenizer breaks text into tokens whenever it sees any whitespace.
/// It would convert the text "Quick brown fox!" into the terms [Quick, brown, fox!].
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

pub struct WhiteSpaceTokenizer;

impl Tokenizer for WhiteSpaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|w| w.to_string())
            .collect::<Vec<String>>()
    }
}

/// A token filter receives the token stream and may add, remove, or change tokens.
/// For example, a lowercase token filter converts all tokens to lowercase, and a stop token
/// filter removes common words (stop words) like the from the token stream.
pub trait TokenFilter: Send + Sync {
    fn filter(&self, tokens: Vec<String>) -> Vec<String>;
}

pub struct LowerCaseTokenFilter;

impl TokenFilter for LowerCaseTokenFilter {
    fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().map(|t| t.to_lowercase()).collect()
    }
}

/// Removes every character that is not a letter or a number, anywhere in the token.
/// "Go言語、" becomes "Go言語" and "e-mail" becomes "email".
pub struct NonWordStripFilter;

impl TokenFilter for NonWordStripFilter {
    fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        let non_word = get_non_word();
        tokens
            .into_iter()
            .map(|t| non_word.replace_all(&t, "").into_owned())
            .collect()
    }
}

/// Keeps tokens whose length in characters is strictly greater than `min_exclusive`.
pub struct CharLengthFilter {
    min_exclusive: usize,
}

impl CharLengthFilter {
    pub fn new(min_exclusive: usize) -> Self {
        Self { min_exclusive }
    }
}

impl Default for CharLengthFilter {
    fn default() -> Self {
        Self { min_exclusive: 2 }
    }
}

impl TokenFilter for CharLengthFilter {
    fn filter(&self, mut tokens: Vec<String>) -> Vec<String> {
        tokens.retain(|t| t.chars().count() > self.min_exclusive);
        tokens
    }
}

pub struct StopWordTokenFilter;

impl TokenFilter for StopWordTokenFilter {
    fn filter(&self, mut tokens: Vec<String>) -> Vec<String> {
        tokens.retain(|t| !is_stop_word(t));
        tokens
    }
}

/// Pure text analysis pipeline - no async, no I/O, just text transformations
pub struct TextAnalyzer {
    tokenizer: Box<dyn Tokenizer>,
    token_filters: Vec<Box<dyn TokenFilter>>,
}

impl TextAnalyzer {
    pub fn new(tokenizer: Box<dyn Tokenizer>, token_filters: Vec<Box<dyn TokenFilter>>) -> Self {
        Self {
            tokenizer,
            token_filters,
        }
    }

    /// The chain used for summary keywords: whitespace split, case fold,
    /// strip non-word characters, drop short tokens, drop stop words.
    pub fn keywords() -> Self {
        Self::new(
            Box::new(WhiteSpaceTokenizer),
            vec![
                Box::new(LowerCaseTokenFilter),
                Box::new(NonWordStripFilter),
                Box::new(CharLengthFilter::default()),
                Box::new(StopWordTokenFilter),
            ],
        )
    }

    pub fn analyze(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(text);
        self.token_filters
            .iter()
            .fold(tokens, |tokens, f| f.filter(tokens))
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::keywords()
    }
}

#[test]
fn test_stop_words_are_exact_match() {
    for w in ["の", "に", "は", "を", "が", "から", "について"] {
        assert!(is_stop_word(w), "{w} should be a stop word");
    }
    for w in ["a", "an", "the", "and", "or", "by"] {
        assert!(is_stop_word(w), "{w} should be a stop word");
    }
    for w in ["Go", "言語", "プログラミング", "development", "The", "のの"] {
        assert!(!is_stop_word(w), "{w} should not be a stop word");
    }
}

#[test]
fn test_keyword_analyzer_chain() {
    let analyzer = TextAnalyzer::keywords();
    let tokens = analyzer.analyze("Go言語、 The RUST-lang! of 12 123 の について");
    assert_eq!(tokens, vec!["go言語", "rustlang", "123"]);
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let filter = CharLengthFilter::default();
    let tokens = filter.filter(vec!["言語".into(), "日本語".into(), "go".into()]);
    assert_eq!(tokens, vec!["日本語"]);
}
