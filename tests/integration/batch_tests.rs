//! Whole-batch behaviour: fan-out, filtering and the written report

use crate::{priced_page, test_client};
use game_price_finder::crawler::{run_batch, Coordinator, RetryPolicy};
use game_price_finder::output::write_report_file;
use game_price_finder::Target;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_end_to_end_report_skips_failed_target() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_string(priced_page("19,99€")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(404))
        .expect(3)
        .mount(&mock_server)
        .await;

    let targets = vec![
        Target::new(format!("{}/a", base_url)),
        Target::new(format!("{}/b", base_url)),
    ];

    let records = run_batch(&test_client(), targets, RetryPolicy::default()).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = dir.path().join("games_prices.csv");
    write_report_file(&records, &report_path).expect("Failed to write report");

    let content = std::fs::read_to_string(&report_path).expect("Failed to read report");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 2, "header plus one data row: {:?}", lines);
    assert_eq!(lines[0], "Game,Price (Euro),Link");
    assert_eq!(lines[1], format!("a,\"19,99€\",{}/a", base_url));
    assert!(!content.contains(&format!("{}/b", base_url)));
}

#[tokio::test]
async fn test_output_is_subset_of_input_without_duplicates() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    for name in ["one", "two", "three"] {
        Mock::given(method("GET"))
            .and(path(format!("/games/{}", name)))
            .respond_with(ResponseTemplate::new(200).set_body_string(priced_page("9,99€")))
            .mount(&mock_server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/games/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let inputs: Vec<String> = vec![
        format!("{}/games/one", base_url),
        format!("{}/games/two", base_url),
        format!("{}/games/one", base_url),
        format!("{}/games/broken", base_url),
        format!("{}/games/three", base_url),
        "not a url".to_string(),
    ];
    let targets: Vec<Target> = inputs.iter().map(|s| Target::new(s.as_str())).collect();

    let coordinator = Coordinator::with_client(test_client(), RetryPolicy::default());
    let report = coordinator.run_with_report(targets).await;

    let input_set: HashSet<&str> = inputs.iter().map(String::as_str).collect();
    let links: Vec<&str> = report.records.iter().map(|r| r.link.as_str()).collect();
    let unique_links: HashSet<&str> = links.iter().copied().collect();

    assert!(report.records.len() <= inputs.len());
    assert_eq!(unique_links.len(), links.len(), "duplicate links: {:?}", links);
    assert!(links.iter().all(|link| input_set.contains(link)));

    assert_eq!(report.records.len(), 3);
    assert_eq!(report.submitted, 6);
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.dropped, 2);
    assert_eq!(report.panicked, 0);
}

#[tokio::test]
async fn test_duplicate_targets_fetched_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/portal"))
        .respond_with(ResponseTemplate::new(200).set_body_string(priced_page("4,99€")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let link = format!("{}/games/portal", mock_server.uri());
    let targets = vec![Target::new(link.as_str()), Target::new(link.as_str())];

    let records = run_batch(&test_client(), targets, RetryPolicy::default()).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "portal");
}

#[tokio::test]
async fn test_records_keep_submission_order() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // The first target answers last
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(priced_page("1,00€"))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/fast"))
        .respond_with(ResponseTemplate::new(200).set_body_string(priced_page("2,00€")))
        .mount(&mock_server)
        .await;

    let targets = vec![
        Target::new(format!("{}/slow", base_url)),
        Target::new(format!("{}/fast", base_url)),
    ];

    let records = run_batch(&test_client(), targets, RetryPolicy::default()).await;
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(names, vec!["slow", "fast"]);
}

#[tokio::test]
async fn test_targets_fetched_concurrently() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(priced_page("3,00€"))
                .set_delay(Duration::from_secs(1)),
        )
        .expect(6)
        .mount(&mock_server)
        .await;

    let targets: Vec<Target> = (0..6)
        .map(|i| Target::new(format!("{}/games/item{}", base_url, i)))
        .collect();

    let start = Instant::now();
    let records = run_batch(&test_client(), targets, RetryPolicy::default()).await;
    let elapsed = start.elapsed();

    assert_eq!(records.len(), 6);
    // Sequential fetching would take at least 6 seconds
    assert!(elapsed < Duration::from_secs(5), "batch took {:?}", elapsed);
}

#[tokio::test]
async fn test_failed_batch_still_writes_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let targets = vec![Target::new(format!("{}/games/down", mock_server.uri()))];
    let records = run_batch(&test_client(), targets, RetryPolicy::default()).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = dir.path().join("games_prices.csv");
    write_report_file(&records, &report_path).expect("Failed to write report");

    let content = std::fs::read_to_string(&report_path).expect("Failed to read report");
    assert_eq!(content, "Game,Price (Euro),Link\r\n");
}
