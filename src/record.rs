//! Paper metadata model and the raw-entry-to-record mapping

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ArxivError, Result};
use crate::feed::FeedEntry;

/// Structured metadata for one version of one paper
///
/// Constructed once per raw feed entry and immutable thereafter.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Record {
    /// Versioned identifier, e.g. `2303.08774v3`
    pub identifier: String,
    pub title: String,
    pub abstract_text: String,
    pub comment: Option<String>,
    /// Always the first element of `categories`
    pub primary_category: String,
    /// All category tags, primary first
    pub categories: Vec<String>,
    pub authors: Vec<String>,
    pub doi: Option<String>,
    pub journal_reference: Option<String>,
    pub submitted_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub pdf_url: String,
}

impl Record {
    /// Map one raw feed entry into a record
    ///
    /// # Errors
    ///
    /// * `ArxivError::MalformedEntry` - if the identifier, title, author list,
    ///   or submission date is missing. Callers skip such entries with a
    ///   warning rather than failing the whole search.
    pub fn from_entry(entry: &FeedEntry) -> Result<Record> {
        let identifier = extract_identifier(&entry.id)?;

        if entry.title.is_empty() {
            return Err(ArxivError::MalformedEntry {
                reason: format!("entry {identifier} has no title"),
            });
        }
        if entry.authors.is_empty() {
            return Err(ArxivError::MalformedEntry {
                reason: format!("entry {identifier} has no authors"),
            });
        }

        let submitted_at = parse_entry_date(&entry.published).ok_or_else(|| {
            ArxivError::MalformedEntry {
                reason: format!(
                    "entry {identifier} has no parseable submission date: {:?}",
                    entry.published
                ),
            }
        })?;
        // Update stamps before the submission stamp would break the
        // submitted <= updated invariant; clamp them to the submission date.
        let updated_at = parse_entry_date(&entry.updated)
            .unwrap_or(submitted_at)
            .max(submitted_at);

        let primary_category = entry
            .primary_category
            .clone()
            .or_else(|| entry.categories.first().cloned())
            .unwrap_or_default();

        // Primary first, then the remaining tags in feed order.
        let mut categories = Vec::with_capacity(entry.categories.len() + 1);
        if !primary_category.is_empty() {
            categories.push(primary_category.clone());
        }
        for category in &entry.categories {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }

        Ok(Record {
            identifier,
            title: entry.title.clone(),
            abstract_text: entry.summary.clone(),
            comment: entry.comment.clone(),
            primary_category,
            categories,
            authors: entry.authors.clone(),
            doi: entry.doi.clone(),
            journal_reference: entry.journal_ref.clone(),
            submitted_at,
            updated_at,
            pdf_url: select_pdf_url(entry),
        })
    }

    /// Identifier with the version suffix stripped
    ///
    /// All versions of the same paper share this base id.
    pub fn base_id(&self) -> &str {
        match self.identifier.rfind('v') {
            Some(pos) if self.identifier[pos + 1..].chars().all(|c| c.is_ascii_digit())
                && pos + 1 < self.identifier.len() =>
            {
                &self.identifier[..pos]
            }
            _ => &self.identifier,
        }
    }
}

/// Bare versioned identifier: the trailing path segment of the entry URI
fn extract_identifier(entry_uri: &str) -> Result<String> {
    let identifier = entry_uri.rsplit('/').next().unwrap_or_default();
    if identifier.is_empty() {
        return Err(ArxivError::MalformedEntry {
            reason: format!("entry has no identifier in URI {entry_uri:?}"),
        });
    }
    Ok(identifier.to_string())
}

// Entries are filtered at day precision; the time of day and timezone of the
// feed timestamps are discarded.
fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

/// Prefer the link declared as PDF; fall back to rewriting the abstract URL
fn select_pdf_url(entry: &FeedEntry) -> String {
    entry
        .links
        .iter()
        .find(|link| link.content_type.as_deref() == Some("application/pdf"))
        .map(|link| link.href.clone())
        .unwrap_or_else(|| format!("{}.pdf", entry.id.replace("/abs/", "/pdf/")))
}
