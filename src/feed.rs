//! Atom feed decoding for the provider's query responses
//!
//! The query endpoint answers with an Atom feed whose entries carry both the
//! standard Atom fields and provider extension elements (`arxiv:comment`,
//! `arxiv:journal_ref`, `arxiv:doi`, `arxiv:primary_category`). The decoder
//! yields raw [`FeedEntry`] values in feed order; mapping them into records
//! is the factory's job, not the decoder's.

use std::io::BufReader;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, instrument};

use crate::error::{ArxivError, Result};

/// Decoded Atom feed: an ordered sequence of raw entries
#[derive(Debug, Clone, Default)]
pub struct Feed {
    pub entries: Vec<FeedEntry>,
}

/// One `<link>` element of an entry, with its relation and content type
#[derive(Debug, Clone, Default)]
pub struct FeedLink {
    pub href: String,
    pub rel: Option<String>,
    pub content_type: Option<String>,
}

/// One raw feed entry, pre-mapping
///
/// Fields are kept as decoded strings; date parsing and link selection happen
/// when the entry is turned into a [`Record`](crate::Record).
#[derive(Debug, Clone, Default)]
pub struct FeedEntry {
    /// Full entry URI, e.g. `http://arxiv.org/abs/2303.08774v3`
    pub id: String,
    pub title: String,
    pub summary: String,
    pub authors: Vec<String>,
    /// RFC 3339 submission timestamp
    pub published: String,
    /// RFC 3339 last-update timestamp
    pub updated: String,
    pub comment: Option<String>,
    pub journal_ref: Option<String>,
    pub doi: Option<String>,
    pub primary_category: Option<String>,
    /// Category tags in feed order
    pub categories: Vec<String>,
    pub links: Vec<FeedLink>,
}

pub struct AtomFeedParser;

impl AtomFeedParser {
    /// Decode a query response body into a [`Feed`]
    ///
    /// # Errors
    ///
    /// * `ArxivError::FeedError` - if the body is not well-formed XML
    #[instrument(skip(xml), fields(xml_size = xml.len()))]
    pub fn parse_feed(xml: &str) -> Result<Feed> {
        let mut reader = Reader::from_reader(BufReader::new(xml.as_bytes()));
        reader.config_mut().trim_text(true);

        let mut entries: Vec<FeedEntry> = Vec::new();
        let mut current = FeedEntry::default();

        let mut buf = Vec::new();
        let mut in_entry = false;
        let mut in_id = false;
        let mut in_title = false;
        let mut in_summary = false;
        let mut in_author = false;
        let mut in_name = false;
        let mut in_published = false;
        let mut in_updated = false;
        let mut in_comment = false;
        let mut in_journal_ref = false;
        let mut in_doi = false;
        let mut current_author = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => match e.name().as_ref() {
                    b"entry" => {
                        in_entry = true;
                        current = FeedEntry::default();
                    }
                    b"id" if in_entry => in_id = true,
                    b"title" if in_entry => in_title = true,
                    b"summary" if in_entry => in_summary = true,
                    b"author" if in_entry => {
                        in_author = true;
                        current_author.clear();
                    }
                    b"name" if in_author => in_name = true,
                    b"published" if in_entry => in_published = true,
                    b"updated" if in_entry => in_updated = true,
                    b"arxiv:comment" if in_entry => in_comment = true,
                    b"arxiv:journal_ref" if in_entry => in_journal_ref = true,
                    b"arxiv:doi" if in_entry => in_doi = true,
                    b"link" if in_entry => current.links.push(read_link(e)?),
                    b"category" if in_entry => {
                        if let Some(term) = read_attribute(e, b"term")? {
                            current.categories.push(term);
                        }
                    }
                    b"arxiv:primary_category" if in_entry => {
                        current.primary_category = read_attribute(e, b"term")?;
                    }
                    _ => {}
                },
                // Self-closing elements carry their data in attributes
                Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                    b"link" if in_entry => current.links.push(read_link(e)?),
                    b"category" if in_entry => {
                        if let Some(term) = read_attribute(e, b"term")? {
                            current.categories.push(term);
                        }
                    }
                    b"arxiv:primary_category" if in_entry => {
                        current.primary_category = read_attribute(e, b"term")?;
                    }
                    _ => {}
                },
                Ok(Event::Text(ref e)) => {
                    let text = e
                        .unescape()
                        .map_err(|err| ArxivError::FeedError(err.to_string()))?;
                    if in_id {
                        current.id.push_str(&text);
                    } else if in_title {
                        append_folded(&mut current.title, &text);
                    } else if in_summary {
                        append_folded(&mut current.summary, &text);
                    } else if in_name {
                        current_author.push_str(&text);
                    } else if in_published {
                        current.published.push_str(&text);
                    } else if in_updated {
                        current.updated.push_str(&text);
                    } else if in_comment {
                        append_optional(&mut current.comment, &text);
                    } else if in_journal_ref {
                        append_optional(&mut current.journal_ref, &text);
                    } else if in_doi {
                        append_optional(&mut current.doi, &text);
                    }
                }
                Ok(Event::End(ref e)) => match e.name().as_ref() {
                    b"entry" => {
                        in_entry = false;
                        entries.push(std::mem::take(&mut current));
                    }
                    b"id" => in_id = false,
                    b"title" => in_title = false,
                    b"summary" => in_summary = false,
                    b"author" => {
                        if in_author && !current_author.is_empty() {
                            current.authors.push(std::mem::take(&mut current_author));
                        }
                        in_author = false;
                    }
                    b"name" => in_name = false,
                    b"published" => in_published = false,
                    b"updated" => in_updated = false,
                    b"arxiv:comment" => in_comment = false,
                    b"arxiv:journal_ref" => in_journal_ref = false,
                    b"arxiv:doi" => in_doi = false,
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(ArxivError::FeedError(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        debug!(entry_count = entries.len(), "decoded Atom feed");
        Ok(Feed { entries })
    }
}

fn read_link(e: &quick_xml::events::BytesStart<'_>) -> Result<FeedLink> {
    let mut link = FeedLink::default();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| ArxivError::FeedError(err.to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|err| ArxivError::FeedError(err.to_string()))?
            .into_owned();
        match attr.key.as_ref() {
            b"href" => link.href = value,
            b"rel" => link.rel = Some(value),
            b"type" => link.content_type = Some(value),
            _ => {}
        }
    }
    Ok(link)
}

fn read_attribute(e: &quick_xml::events::BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| ArxivError::FeedError(err.to_string()))?;
        if attr.key.as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|err| ArxivError::FeedError(err.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

// Titles and abstracts arrive hard-wrapped; fold them back onto one line
// with single spaces.
fn append_folded(target: &mut String, text: &str) {
    for word in text.split_whitespace() {
        if !target.is_empty() {
            target.push(' ');
        }
        target.push_str(word);
    }
}

fn append_optional(target: &mut Option<String>, text: &str) {
    append_folded(target.get_or_insert_with(String::new), text);
}
