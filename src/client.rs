//! HTTP client for the arXiv query and retrieval endpoints

use std::path::{Path, PathBuf};

use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{ArxivError, Result};
use crate::feed::{AtomFeedParser, Feed};
use crate::query::{SearchParams, WireRequest};
use crate::record::Record;
use crate::retrieve::{prepare_destination, save_record};
use crate::search::SearchSession;

/// Client for the arXiv public search and retrieval API
///
/// # Example
///
/// ```no_run
/// use arxiv_client_rs::{ArxivClient, Detail, SearchParams};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ArxivClient::new();
///     let session = client
///         .search(
///             SearchParams::new("all:exoplanets AND cat:astro-ph.EP")
///                 .start_date("2023-03-14")
///                 .end_date("2023-05-04"),
///         )
///         .await?;
///
///     println!("{}", session.results(Detail::Low));
///     let manifest = session.download_results(&client, "./papers").await?;
///     println!("saved {} files", manifest.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ArxivClient {
    client: Client,
    config: ClientConfig,
}

impl ArxivClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use arxiv_client_rs::{ArxivClient, ClientConfig};
    ///
    /// let config = ClientConfig::new().with_user_agent("my-tool/1.0");
    /// let client = ArxivClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.effective_user_agent())
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Create a new client with a custom reqwest client and default configuration
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            config: ClientConfig::new(),
        }
    }

    /// Run a search and return its filtered result set
    ///
    /// Validates the parameters and date window before any network access,
    /// then issues exactly one request. See [`SearchSession`] for the
    /// filtering and rendering behavior.
    pub async fn search(&self, params: SearchParams) -> Result<SearchSession> {
        SearchSession::create(self, params).await
    }

    /// Fetch a single record directly by identifier
    ///
    /// Accepts a bare id (`2303.08774`), a versioned id (`2303.08774v3`), an
    /// `arxiv:` prefixed id, or an abstract-page URL.
    ///
    /// # Errors
    ///
    /// * `ArxivError::Configuration` - if the identifier is empty
    /// * `ArxivError::ApiError` - if the provider returns no entry for the id
    #[instrument(skip(self), fields(id = %id))]
    pub async fn fetch_by_id(&self, id: &str) -> Result<Record> {
        let id = normalize_id(id)?;
        let url = format!("{}?id_list={}", self.config.effective_base_url(), id);

        debug!("fetching single entry by id");
        let body = self.get_text(&url).await?;
        let feed = AtomFeedParser::parse_feed(&body)?;

        let entry = feed.entries.first().ok_or_else(|| ArxivError::ApiError {
            message: format!("no entry returned for id {id}"),
        })?;
        Record::from_entry(entry)
    }

    /// Download one record's document into `destination_dir`
    ///
    /// Single-item pass-through to the same write path the batch retriever
    /// uses; returns the saved file's path.
    pub async fn download<P: AsRef<Path>>(
        &self,
        record: &Record,
        destination_dir: P,
    ) -> Result<PathBuf> {
        let destination = destination_dir.as_ref();
        prepare_destination(destination).await?;
        let (path, _size) = save_record(self, record, destination).await?;
        Ok(path)
    }

    /// Issue the single search request and decode the Atom response
    #[instrument(skip(self, request), fields(query = %request.search_query, max_results = request.max_results))]
    pub(crate) async fn fetch_feed(&self, request: &WireRequest) -> Result<Feed> {
        let url = request.to_url(self.config.effective_base_url());
        debug!("making search API request");
        let body = self.get_text(&url).await?;
        AtomFeedParser::parse_feed(&body)
    }

    /// Fetch a document's raw bytes (one per-paper download)
    pub(crate) async fn fetch_document(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ArxivError::ApiError {
                message: format!(
                    "HTTP {}: {}",
                    response.status(),
                    response.status().canonical_reason().unwrap_or("Unknown error")
                ),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(ArxivError::ApiError {
                message: format!(
                    "HTTP {}: {}",
                    response.status(),
                    response.status().canonical_reason().unwrap_or("Unknown error")
                ),
            });
        }
        Ok(response.text().await?)
    }
}

impl Default for ArxivClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce an identifier in any accepted form to the bare (possibly versioned) id
///
/// Handles `2303.08774`, `2303.08774v3`, `arxiv:2303.08774`, and
/// `https://arxiv.org/abs/2303.08774v3`. The version suffix is kept: it names
/// a specific version of the paper.
pub fn normalize_id(id: &str) -> Result<String> {
    let id = id.trim();

    let id = match id.find("/abs/") {
        Some(pos) => id[pos + 5..].split('/').next().unwrap_or_default(),
        None => id,
    };
    let id = id.strip_prefix("arxiv:").or_else(|| id.strip_prefix("arXiv:")).unwrap_or(id);

    if id.is_empty() {
        return Err(ArxivError::Configuration {
            message: "empty identifier".to_string(),
        });
    }
    Ok(id.to_string())
}
