//! # arXiv Client
//!
//! A Rust client library for the arXiv public search and retrieval API.
//! This crate provides structured metadata search, client-side date-range
//! filtering, and bulk document download.
//!
//! ## Features
//!
//! - **Metadata Search**: Query by keywords, authors, and categories using
//!   the arXiv query mini-language
//! - **Date Windows**: Filter results to an inclusive date range on the
//!   client, which the server cannot do itself
//! - **Bulk Retrieval**: Download every matched paper's PDF sequentially,
//!   with a manifest of saved paths
//! - **Async Support**: Built on tokio for async/await support
//! - **Error Handling**: Typed errors for invalid parameters, bad dates,
//!   malformed feed entries, and unusable destinations
//!
//! ## Quick Start
//!
//! ### Searching for Papers
//!
//! ```no_run
//! use arxiv_client_rs::{ArxivClient, Detail, SearchParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ArxivClient::new();
//!
//!     let session = client
//!         .search(
//!             SearchParams::new("all:exoplanets AND cat:astro-ph.EP")
//!                 .start_date("2023-03-14")
//!                 .end_date("2023-05-04")
//!                 .max_results(500),
//!         )
//!         .await?;
//!
//!     println!("{}", session.results(Detail::High));
//!     Ok(())
//! }
//! ```
//!
//! ### Downloading the Results
//!
//! ```no_run
//! use arxiv_client_rs::{ArxivClient, SearchParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ArxivClient::new();
//!     let session = client
//!         .search(SearchParams::new("au:lovelace").start_date("yesterday"))
//!         .await?;
//!
//!     let manifest = session.download_results(&client, "./papers").await?;
//!     for path in &manifest.paths {
//!         println!("saved {}", path.display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod dates;
pub mod error;
pub mod feed;
pub mod query;
pub mod record;
pub mod retrieve;
pub mod search;

// Re-export main types for convenience
pub use client::{ArxivClient, normalize_id};
pub use config::ClientConfig;
pub use dates::DateWindow;
pub use error::{ArxivError, Result};
pub use feed::{Feed, FeedEntry, FeedLink};
pub use query::{DEFAULT_MAX_RESULTS, MAX_RESULTS_CEILING, SearchParams, SortOrder};
pub use record::Record;
pub use retrieve::{Manifest, Retriever};
pub use search::{Detail, SearchSession};
