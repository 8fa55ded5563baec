use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;

use crate::error::SearchError;

pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        bind_addr: get_env_or_default("SIFT_BIND_ADDR", "0.0.0.0:8080"),
        static_dir: get_env_or_default("SIFT_STATIC_DIR", "static"),
        search: SearchConfig {
            search_url: get_env_or_default("SIFT_SEARCH_URL", DEFAULT_SEARCH_URL),
            timeout_secs: get_parsed_or_default("SIFT_TIMEOUT_SECS", 10),
            user_agent: get_env_or_default("SIFT_USER_AGENT", DEFAULT_USER_AGENT),
            result_hint: 5,
        },
    }
});

pub struct Config {
    pub bind_addr: String,
    pub static_dir: String,
    pub search: SearchConfig,
}

/// Settings for the outbound request to the upstream search page.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub search_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Sent upstream as the `num` parameter.
    pub result_hint: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            result_hint: 5,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_secs == 0 {
            return Err(SearchError::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }
        if self.result_hint == 0 {
            return Err(SearchError::Config(
                "result_hint must be greater than 0".into(),
            ));
        }
        if url::Url::parse(&self.search_url).is_err() {
            return Err(SearchError::Config(format!(
                "search_url is not an absolute URL: {}",
                self.search_url
            )));
        }
        Ok(())
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_parsed_or_default<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("ignoring invalid value for {key}: {raw}");
            default
        }),
        Err(_) => default,
    }
}
