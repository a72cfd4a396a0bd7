//! Search orchestration: one request, factory mapping, date filtering, rendering

use std::fmt::Write as _;
use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, instrument, warn};

use crate::client::ArxivClient;
use crate::dates::DateWindow;
use crate::error::Result;
use crate::query::SearchParams;
use crate::record::Record;
use crate::retrieve::{Manifest, Retriever};

/// Rendering verbosity for [`SearchSession::results`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Detail {
    /// Identifier, title, authors, primary category, URL, submitted date
    #[default]
    Low,
    /// Everything in `Low` plus abstract, comment, all categories, DOI,
    /// journal reference, and last-updated date
    High,
}

/// The filtered, ordered result set of one search invocation
///
/// Created by [`ArxivClient::search`]. Parameters are validated and the date
/// window resolved before the single network request is issued; the returned
/// session is terminal and its projections ([`results`](Self::results),
/// [`records`](Self::records)) never re-query.
#[derive(Debug)]
pub struct SearchSession {
    window: DateWindow,
    records: Vec<Record>,
}

impl SearchSession {
    /// Run a search: validate, query once, map entries, filter by date
    ///
    /// Malformed feed entries are skipped with a warning; a transport or
    /// decoding failure on the single search request is fatal. Zero matches
    /// is not an error.
    pub async fn create(client: &ArxivClient, params: SearchParams) -> Result<Self> {
        Self::create_at(client, params, Local::now().date_naive()).await
    }

    /// Like [`create`](Self::create) with an injected reference date, so
    /// `"today"`/`"yesterday"` resolution is deterministic under test
    #[instrument(skip(client, params), fields(query = %params.query))]
    pub async fn create_at(
        client: &ArxivClient,
        params: SearchParams,
        reference_date: NaiveDate,
    ) -> Result<Self> {
        // Fail fast: both validations happen before any network access.
        let request = params.build()?;
        let window = DateWindow::resolve(&params.start_date, &params.end_date, reference_date)?;

        let feed = client.fetch_feed(&request).await?;
        let fetched = feed.entries.len();

        let mut records = Vec::new();
        for entry in &feed.entries {
            let record = match Record::from_entry(entry) {
                Ok(record) => record,
                Err(e) => {
                    warn!(error = %e, "skipping malformed feed entry");
                    continue;
                }
            };
            if window.contains(record.submitted_at) {
                records.push(record);
            } else {
                debug!(
                    identifier = %record.identifier,
                    submitted_at = %record.submitted_at,
                    "entry outside date window"
                );
            }
        }

        info!(
            fetched,
            retained = records.len(),
            window_start = %window.start(),
            window_end = %window.end(),
            "search completed"
        );

        Ok(Self { window, records })
    }

    /// The retained records, in provider order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of retained records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The resolved date window this session filtered with
    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// Render the result set as a single formatted block
    ///
    /// A count header, then one section per record delimited by a separator
    /// line carrying the record's identifier. Pure projection; repeatable.
    pub fn results(&self, detail: Detail) -> String {
        let mut out = format!("{} results\n", self.records.len());
        for record in &self.records {
            out.push('\n');
            render_record(&mut out, record, detail);
        }
        out
    }

    /// Download every retained record's document into `destination_dir`
    ///
    /// Delegates to [`Retriever`]; see there for the per-item failure policy.
    pub async fn download_results<P: AsRef<Path>>(
        &self,
        client: &ArxivClient,
        destination_dir: P,
    ) -> Result<Manifest> {
        Retriever::new(client).download(&self.records, destination_dir).await
    }
}

fn render_record(out: &mut String, record: &Record, detail: Detail) {
    let _ = writeln!(out, "{0} {1} {0}", "-".repeat(24), record.identifier);
    let _ = writeln!(out, "Title: {}", record.title);
    let _ = writeln!(out, "Authors: {}", record.authors.join(", "));
    let _ = writeln!(out, "Primary category: {}", record.primary_category);
    let _ = writeln!(out, "URL: {}", record.pdf_url);
    let _ = writeln!(out, "Submitted: {}", record.submitted_at);

    if detail == Detail::High {
        let _ = writeln!(out, "Updated: {}", record.updated_at);
        let _ = writeln!(out, "Categories: {}", record.categories.join(", "));
        if let Some(comment) = &record.comment {
            let _ = writeln!(out, "Comment: {comment}");
        }
        if let Some(journal_reference) = &record.journal_reference {
            let _ = writeln!(out, "Journal reference: {journal_reference}");
        }
        if let Some(doi) = &record.doi {
            let _ = writeln!(out, "DOI: {doi}");
        }
        let _ = writeln!(out, "Abstract: {}", record.abstract_text);
    }
}
