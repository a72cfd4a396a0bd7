//! Mocked end-to-end tests for search, date filtering, and rendering

mod common;

use arxiv_client_rs::{Detail, SearchParams, SearchSession, SortOrder};
use chrono::NaiveDate;
use common::{atom_entry, atom_entry_without_authors, atom_feed, reference_date, test_client};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
#[traced_test]
async fn test_search_filters_by_date_window() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    // 5 entries inside the window, 1 submitted after it
    let body = atom_feed(&[
        atom_entry(&base, "2303.10001v1", "In-range one", "2023-03-14T12:00:00Z"),
        atom_entry(&base, "2303.10002v1", "In-range two", "2023-03-20T09:30:00Z"),
        atom_entry(&base, "2304.10003v2", "In-range three", "2023-04-02T08:00:00Z"),
        atom_entry(&base, "2304.10004v1", "In-range four", "2023-04-28T23:59:59Z"),
        atom_entry(&base, "2305.10005v1", "In-range five", "2023-05-04T00:00:01Z"),
        atom_entry(&base, "2305.10006v1", "Out of range", "2023-05-10T10:00:00Z"),
    ]);

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("start", "0"))
        .and(query_param("max_results", "500"))
        .and(query_param("sortBy", "submittedDate"))
        .and(query_param("sortOrder", "descending"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&base);
    let params = SearchParams::new("all:exoplanets AND cat:astro-ph.EP")
        .start_date("2023-03-14")
        .end_date("2023-05-04")
        .max_results(500)
        .sort_order(SortOrder::Descending);

    let session = SearchSession::create_at(&client, params, reference_date())
        .await
        .unwrap();

    assert_eq!(session.len(), 5);
    let cutoff = NaiveDate::from_ymd_opt(2023, 5, 4).unwrap();
    assert!(session.records().iter().all(|r| r.submitted_at <= cutoff));
    assert!(session.records().iter().all(|r| r.identifier != "2305.10006v1"));

    // Provider order is preserved
    let identifiers: Vec<&str> = session
        .records()
        .iter()
        .map(|r| r.identifier.as_str())
        .collect();
    assert_eq!(
        identifiers,
        vec![
            "2303.10001v1",
            "2303.10002v1",
            "2304.10003v2",
            "2304.10004v1",
            "2305.10005v1"
        ]
    );
}

#[tokio::test]
#[traced_test]
async fn test_search_renders_count_and_sections() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    let body = atom_feed(&[
        atom_entry(&base, "2304.20001v1", "First paper", "2023-04-01T12:00:00Z"),
        atom_entry(&base, "2304.20002v1", "Second paper", "2023-04-02T12:00:00Z"),
    ]);

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = test_client(&base);
    let params = SearchParams::new("cat:astro-ph.EP")
        .start_date("2023-04-01")
        .end_date("2023-04-30");
    let session = SearchSession::create_at(&client, params, reference_date())
        .await
        .unwrap();

    let low = session.results(Detail::Low);
    assert!(low.starts_with("2 results\n"));
    assert!(low.contains("2304.20001v1"));
    assert!(low.contains("Title: Second paper"));
    assert!(low.contains("Authors: Ada Lovelace, Charles Babbage"));

    // Repeated projection without re-querying, at both detail levels
    let high = session.results(Detail::High);
    for line in low.lines() {
        assert!(high.contains(line), "missing low-detail line: {line}");
    }
    assert!(high.contains("Comment: 9 pages"));
    assert!(high.contains("Abstract: Abstract of 2304.20001v1."));
}

#[tokio::test]
#[traced_test]
async fn test_search_with_zero_entries() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(atom_feed(&[])))
        .mount(&mock_server)
        .await;

    let client = test_client(&base);
    let params = SearchParams::new("all:nonexistent")
        .start_date("2023-04-01")
        .end_date("2023-04-30");
    let session = SearchSession::create_at(&client, params, reference_date())
        .await
        .unwrap();

    assert!(session.is_empty());
    assert_eq!(session.results(Detail::Low), "0 results\n");
}

#[tokio::test]
#[traced_test]
async fn test_search_skips_malformed_entry() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    let body = atom_feed(&[
        atom_entry(&base, "2304.30001v1", "Good paper", "2023-04-01T12:00:00Z"),
        atom_entry_without_authors(&base, "2304.30002v1", "2023-04-02T12:00:00Z"),
        atom_entry(&base, "2304.30003v1", "Another good paper", "2023-04-03T12:00:00Z"),
    ]);

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = test_client(&base);
    let params = SearchParams::new("cat:astro-ph.EP")
        .start_date("2023-04-01")
        .end_date("2023-04-30");
    let session = SearchSession::create_at(&client, params, reference_date())
        .await
        .unwrap();

    // The authorless entry is skipped with a warning, not fatal
    assert_eq!(session.len(), 2);
    assert!(logs_contain("skipping malformed feed entry"));
}

#[tokio::test]
#[traced_test]
async fn test_fetch_by_id() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    let body = atom_feed(&[atom_entry(
        &base,
        "2303.08774v3",
        "Single paper",
        "2023-03-15T17:15:04Z",
    )]);

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("id_list", "2303.08774v3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&base);
    let record = client
        .fetch_by_id("https://arxiv.org/abs/2303.08774v3")
        .await
        .unwrap();

    assert_eq!(record.identifier, "2303.08774v3");
    assert_eq!(record.base_id(), "2303.08774");
    assert_eq!(record.title, "Single paper");
    assert_eq!(record.primary_category, "astro-ph.EP");
}
