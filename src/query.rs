//! Search parameter validation and wire-request construction
//!
//! The arXiv query endpoint expects its mini-language terms joined by `+`
//! rather than spaces, a zero-based `start` offset, a bounded `max_results`,
//! and `sortBy`/`sortOrder` enum values. [`SearchParams::build`] performs the
//! translation and rejects invalid parameters before any network access.

use std::fmt;
use std::str::FromStr;

use crate::error::{ArxivError, Result};

/// Hard ceiling the provider imposes on `max_results` per request
pub const MAX_RESULTS_CEILING: usize = 30_000;

/// Default number of results requested per search
pub const DEFAULT_MAX_RESULTS: usize = 250;

/// Sort order for search results, by submission date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Provider enum value for the `sortOrder` request parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ArxivError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ascending" => Ok(SortOrder::Ascending),
            "descending" => Ok(SortOrder::Descending),
            other => Err(ArxivError::Configuration {
                message: format!(
                    "sort_order must be \"ascending\" or \"descending\", got \"{other}\""
                ),
            }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder for the parameters of one search invocation
///
/// # Example
///
/// ```
/// use arxiv_client_rs::{SearchParams, SortOrder};
///
/// let params = SearchParams::new("all:exoplanets AND cat:astro-ph.EP")
///     .start_date("2023-03-14")
///     .end_date("2023-05-04")
///     .max_results(500)
///     .sort_order(SortOrder::Descending);
/// ```
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub(crate) query: String,
    pub(crate) start_date: String,
    pub(crate) end_date: String,
    pub(crate) max_results: usize,
    pub(crate) sort_order: SortOrder,
}

impl SearchParams {
    /// Create search parameters for a query in the provider's mini-language
    ///
    /// Defaults: `end_date = "today"`, `max_results = 250`,
    /// `sort_order = descending`. `start_date` has no default and must be set.
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
            start_date: String::new(),
            end_date: "today".to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            sort_order: SortOrder::Descending,
        }
    }

    /// Set the start of the date window (`"today"`, `"yesterday"`, or `YYYY-MM-DD`)
    pub fn start_date<S: Into<String>>(mut self, start_date: S) -> Self {
        self.start_date = start_date.into();
        self
    }

    /// Set the end of the date window (`"today"`, `"yesterday"`, or `YYYY-MM-DD`)
    pub fn end_date<S: Into<String>>(mut self, end_date: S) -> Self {
        self.end_date = end_date.into();
        self
    }

    /// Set the maximum number of results to request from the server
    ///
    /// Because the server cannot filter by date range, this is also the size
    /// of the pool the client-side date filter draws from.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the sort order (by submission date)
    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Validate the parameters and build the wire request
    ///
    /// # Errors
    ///
    /// * `ArxivError::Configuration` - if `max_results` is 0 or exceeds the
    ///   provider ceiling of 30,000
    pub fn build(&self) -> Result<WireRequest> {
        if self.max_results == 0 {
            return Err(ArxivError::Configuration {
                message: "max_results must be at least 1".to_string(),
            });
        }
        if self.max_results > MAX_RESULTS_CEILING {
            return Err(ArxivError::Configuration {
                message: format!(
                    "max_results {} exceeds the provider ceiling of {}",
                    self.max_results, MAX_RESULTS_CEILING
                ),
            });
        }

        Ok(WireRequest {
            search_query: normalize_query(&self.query),
            start: 0,
            max_results: self.max_results,
            sort_order: self.sort_order,
        })
    }
}

/// Replace every literal space with the provider's `+` join token
///
/// Idempotent: queries already using `+` pass through unchanged. All other
/// characters are preserved verbatim.
pub fn normalize_query(query: &str) -> String {
    query.replace(' ', "+")
}

/// Request parameters for one GET against the query endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    /// Normalized query string (spaces already replaced with `+`)
    pub search_query: String,
    /// Zero-based result offset, always 0 for a single search
    pub start: usize,
    /// Result count to request, within `[1, MAX_RESULTS_CEILING]`
    pub max_results: usize,
    /// Sort order by submission date
    pub sort_order: SortOrder,
}

impl WireRequest {
    /// Render the full request URL against a base endpoint
    ///
    /// The normalized query is inserted verbatim: the `+` join tokens are the
    /// encoding the provider expects.
    pub fn to_url(&self, base_url: &str) -> String {
        format!(
            "{}?search_query={}&start={}&max_results={}&sortBy=submittedDate&sortOrder={}",
            base_url,
            self.search_query,
            self.start,
            self.max_results,
            self.sort_order.as_str()
        )
    }
}
