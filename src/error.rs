use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Error types for arXiv client operations
#[derive(Error, Debug)]
pub enum ArxivError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Atom feed decoding failed
    #[error("feed decoding failed: {0}")]
    FeedError(String),

    /// Invalid search parameters, rejected before any network call
    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    /// Date input was not "today", "yesterday", or YYYY-MM-DD
    #[error("invalid date input: {input} (expected \"today\", \"yesterday\", or YYYY-MM-DD)")]
    InvalidDate { input: String },

    /// Resolved start date is after the end date
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// One feed entry is missing required fields; skipped, not fatal
    #[error("malformed feed entry: {reason}")]
    MalformedEntry { reason: String },

    /// Download destination directory is unusable
    #[error("unusable destination {}: {message}", .path.display())]
    Destination { path: PathBuf, message: String },

    /// Filesystem write failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic API error
    #[error("API error: {message}")]
    ApiError { message: String },
}

pub type Result<T> = std::result::Result<T, ArxivError>;
