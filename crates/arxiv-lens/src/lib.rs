//! arXiv Lens
//!
//! A small web backend around the arXiv search API. It searches papers with
//! keyword, date-range and sort filters, suggests follow-up keywords mined from
//! the returned abstracts, and translates English text to Japanese one sentence
//! at a time through a pretrained sequence-to-sequence model.
//!
//! # Pipelines
//!
//! - **Search**: query builder → [`client::ArxivClient`] → result normalizer → keyword suggester
//! - **Translate**: sentence segmenter → [`translate::TranslationEngine`] per sentence → joiner
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use arxiv_lens::{client::ArxivClient, config::Config, search::SearchService};
//! use arxiv_lens::models::SearchRequest;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ArxivClient::new(&config)?;
//!     let service = SearchService::new(Arc::new(client));
//!
//!     let request = SearchRequest::new("graph neural networks");
//!     let response = service.search(&request).await?;
//!     println!("{:?}", response.suggestions);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod server;
pub mod translate;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ApiError, ClientError, EngineError, SearchError, TranslationError};
