//! One-shot lookups against a canned provider, captured into a buffer.

mod common;

use fpeople::{run_lookup, Filter, FormattedResult, LookupError, LookupRequest, ResultWriter};
use serde_json::json;
use serpstack_client::SearchOverrides;

use common::{two_results, FakeSearcher};

fn request(name: &str) -> LookupRequest {
    LookupRequest {
        name: name.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn invalid_name_is_rejected_before_searching() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ResultWriter::new(dir.path());
    let searcher = FakeSearcher::new(vec![]);
    let mut out = Vec::new();

    let err = run_lookup(&searcher, &writer, &request("  J "), &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::InvalidName));
    assert!(searcher.calls().is_empty());
    assert!(out.is_empty());
}

#[tokio::test]
async fn provider_error_is_returned_and_nothing_is_printed() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ResultWriter::new(dir.path());
    let searcher = FakeSearcher::new(vec![json!({
        "success": false,
        "error": {"code": 104, "type": "usage_limit_reached"}
    })]);
    let mut out = Vec::new();

    let mut req = request("Jane Doe");
    req.save = Some("jane".into());
    let err = run_lookup(&searcher, &writer, &req, &mut out)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "search failed: usage_limit_reached");
    assert!(out.is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn json_output_is_an_array_of_formatted_results() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ResultWriter::new(dir.path());
    let searcher = FakeSearcher::new(vec![two_results()]);
    let mut out = Vec::new();

    let mut req = request(" Jane Doe ");
    req.json = true;
    req.overrides = SearchOverrides {
        region: Some("id".into()),
        ..Default::default()
    };
    let outcome = run_lookup(&searcher, &writer, &req, &mut out).await.unwrap();

    assert_eq!(searcher.calls()[0].0, "Jane Doe");
    assert_eq!(searcher.calls()[0].1.region.as_deref(), Some("id"));

    let printed: Vec<FormattedResult> = serde_json::from_slice(&out).unwrap();
    assert_eq!(printed, outcome.results);
    assert_eq!(printed.len(), 2);
    assert_eq!(printed[1].domain, "twitter.com");
    assert!(outcome.saved.is_none());
}

#[tokio::test]
async fn text_output_numbers_filtered_results() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ResultWriter::new(dir.path());
    let searcher = FakeSearcher::new(vec![two_results()]);
    let mut out = Vec::new();

    let mut req = request("Jane Doe");
    req.filter = Filter {
        domain: Some("twitter".into()),
        keyword: None,
    };
    run_lookup(&searcher, &writer, &req, &mut out).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("1. Jane Doe (@jane)"), "{text}");
    assert!(!text.contains("LinkedIn"), "{text}");
}

#[tokio::test]
async fn empty_result_set_says_so() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ResultWriter::new(dir.path());
    let searcher = FakeSearcher::new(vec![json!({"organic_results": []})]);
    let mut out = Vec::new();

    run_lookup(&searcher, &writer, &request("Jane Doe"), &mut out)
        .await
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "No results found.\n");
}

#[tokio::test]
async fn save_writes_the_printed_results() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ResultWriter::new(dir.path());
    let searcher = FakeSearcher::new(vec![two_results()]);
    let mut out = Vec::new();

    let mut req = request("Jane Doe");
    req.save = Some("jane".into());
    let outcome = run_lookup(&searcher, &writer, &req, &mut out).await.unwrap();

    let path = outcome.saved.expect("saved path");
    assert_eq!(path.parent(), Some(dir.path()));
    let written: Vec<FormattedResult> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, outcome.results);
}

#[tokio::test]
async fn failed_save_is_an_error_after_printing() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ResultWriter::new(dir.path().join("missing"));
    let searcher = FakeSearcher::new(vec![two_results()]);
    let mut out = Vec::new();

    let mut req = request("Jane Doe");
    req.save = Some("jane".into());
    let err = run_lookup(&searcher, &writer, &req, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Persist(_)));
    assert!(!out.is_empty());
}
