pub mod analyzer;
pub mod api;
pub mod config;
pub mod data_models;
pub mod error;
pub mod extractor;
pub mod fallback;
pub mod fetcher;
pub mod pipeline;
pub mod summarizer;

pub use data_models::{ResultSet, ResultSource, SearchOutcome, SearchResult, Summary};
pub use error::{ExtractError, FetchError, SearchError};
pub use pipeline::SearchPipeline;
