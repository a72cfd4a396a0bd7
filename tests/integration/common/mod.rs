//! Common test utilities for mocked arXiv API tests

// Each test target compiles this module; not every target uses every helper.
#![allow(dead_code)]

use arxiv_client_rs::{ArxivClient, ClientConfig};
use chrono::NaiveDate;

/// Create a client pointing at a mock server
pub fn test_client(base_url: &str) -> ArxivClient {
    let config = ClientConfig::new()
        .with_base_url(format!("{base_url}/api/query"))
        .with_user_agent("arxiv-client-tests");
    ArxivClient::with_config(config)
}

/// Reference date used by the date-window tests
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 5, 10).unwrap()
}

/// Build a record whose document is served by `base_url`
pub fn make_record(base_url: &str, identifier: &str) -> arxiv_client_rs::Record {
    let day = NaiveDate::from_ymd_opt(2023, 4, 2).unwrap();
    arxiv_client_rs::Record {
        identifier: identifier.to_string(),
        title: format!("Paper {identifier}"),
        abstract_text: format!("Abstract of {identifier}."),
        comment: None,
        primary_category: "astro-ph.EP".to_string(),
        categories: vec!["astro-ph.EP".to_string()],
        authors: vec!["Ada Lovelace".to_string()],
        doi: None,
        journal_reference: None,
        submitted_at: day,
        updated_at: day,
        pdf_url: format!("{base_url}/pdf/{identifier}"),
    }
}

/// Build one Atom `<entry>` with a PDF link served by `base_url`
pub fn atom_entry(base_url: &str, id: &str, title: &str, published: &str) -> String {
    format!(
        r#"  <entry>
    <id>http://arxiv.org/abs/{id}</id>
    <updated>{published}</updated>
    <published>{published}</published>
    <title>{title}</title>
    <summary>Abstract of {id}.</summary>
    <author><name>Ada Lovelace</name></author>
    <author><name>Charles Babbage</name></author>
    <arxiv:comment xmlns:arxiv="http://arxiv.org/schemas/atom">9 pages</arxiv:comment>
    <link href="http://arxiv.org/abs/{id}" rel="alternate" type="text/html"/>
    <link title="pdf" href="{base_url}/pdf/{id}" rel="related" type="application/pdf"/>
    <arxiv:primary_category xmlns:arxiv="http://arxiv.org/schemas/atom" term="astro-ph.EP"/>
    <category term="astro-ph.EP" scheme="http://arxiv.org/schemas/atom"/>
    <category term="astro-ph.IM" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
"#
    )
}

/// Like [`atom_entry`] but without any `<author>` element
pub fn atom_entry_without_authors(base_url: &str, id: &str, published: &str) -> String {
    format!(
        r#"  <entry>
    <id>http://arxiv.org/abs/{id}</id>
    <updated>{published}</updated>
    <published>{published}</published>
    <title>Authorless entry</title>
    <summary>Abstract of {id}.</summary>
    <link href="{base_url}/pdf/{id}" rel="related" type="application/pdf"/>
    <category term="astro-ph.EP" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
"#
    )
}

/// Wrap entries into a complete Atom feed response body
pub fn atom_feed(entries: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:arxiv="http://arxiv.org/schemas/atom">
  <title>ArXiv Query Results</title>
  <id>http://arxiv.org/api/mock-request</id>
  <updated>2023-05-10T00:00:00-04:00</updated>
{}</feed>"#,
        entries.concat()
    )
}
