//! Retry loop behaviour against a mock server

use crate::{priced_page, test_client};
use game_price_finder::crawler::{fetch_with_retry, RetryPolicy};
use game_price_finder::Target;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_non_200_target_attempted_max_attempts_times() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/broken"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&mock_server)
        .await;

    let target = Target::new(format!("{}/games/broken", mock_server.uri()));
    let record = fetch_with_retry(&test_client(), &target, &RetryPolicy::default()).await;

    assert!(record.is_none());
}

#[tokio::test]
async fn test_not_found_retried_like_any_failure_by_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(3)
        .mount(&mock_server)
        .await;

    let target = Target::new(format!("{}/games/gone", mock_server.uri()));
    let record = fetch_with_retry(&test_client(), &target, &RetryPolicy::default()).await;

    assert!(record.is_none());
}

#[tokio::test]
async fn test_success_on_third_attempt() {
    let mock_server = MockServer::start().await;

    // First two attempts fail, then the page comes back
    Mock::given(method("GET"))
        .and(path("/games/celeste"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .with_priority(1)
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/games/celeste"))
        .respond_with(ResponseTemplate::new(200).set_body_string(priced_page("19,99€")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let link = format!("{}/games/celeste", mock_server.uri());
    let target = Target::new(link.clone());
    let record = fetch_with_retry(&test_client(), &target, &RetryPolicy::default())
        .await
        .expect("third attempt should succeed");

    assert_eq!(record.name, "celeste");
    assert_eq!(record.price, "19,99€");
    assert_eq!(record.link, link);
}

#[tokio::test]
async fn test_success_stops_further_attempts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/hades"))
        .respond_with(ResponseTemplate::new(200).set_body_string(priced_page("24,50€")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let target = Target::new(format!("{}/games/hades", mock_server.uri()));
    let record = fetch_with_retry(&test_client(), &target, &RetryPolicy::default()).await;

    assert_eq!(record.map(|r| r.price), Some("24,50€".to_string()));
}

#[tokio::test]
async fn test_page_without_price_yields_sentinel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/unreleased"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><p>Coming soon</p></body></html>"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let target = Target::new(format!("{}/games/unreleased", mock_server.uri()));
    let record = fetch_with_retry(&test_client(), &target, &RetryPolicy::default())
        .await
        .expect("page was fetched");

    assert_eq!(record.name, "unreleased");
    assert_eq!(record.price, "0");
}

#[tokio::test]
async fn test_windows_1252_page_is_decoded() {
    let mock_server = MockServer::start().await;

    // 0xE9 is 'é' and 0x80 is '€' in windows-1252; neither is valid UTF-8
    let mut body = b"<html><head><title>Caf\xe9</title></head><body><table><tr>".to_vec();
    body.extend_from_slice(b"<td class=\"price js-price\"> 19,99\x80 </td>");
    body.extend_from_slice(b"</tr></table></body></html>");

    Mock::given(method("GET"))
        .and(path("/games/cafe"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(body, "text/html; charset=windows-1252"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let target = Target::new(format!("{}/games/cafe", mock_server.uri()));
    let record = fetch_with_retry(&test_client(), &target, &RetryPolicy::default())
        .await
        .expect("page was fetched");

    assert_eq!(record.price, "19,99€");
    assert!(!record.has_parse_error());
}

#[tokio::test]
async fn test_custom_attempt_bound() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/flaky"))
        .respond_with(ResponseTemplate::new(502))
        .expect(5)
        .mount(&mock_server)
        .await;

    let target = Target::new(format!("{}/games/flaky", mock_server.uri()));
    let policy = RetryPolicy::new().with_max_attempts(5);
    let record = fetch_with_retry(&test_client(), &target, &policy).await;

    assert!(record.is_none());
}

#[tokio::test]
async fn test_client_errors_not_retried_when_disabled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let target = Target::new(format!("{}/games/missing", mock_server.uri()));
    let policy = RetryPolicy::new().with_retry_client_errors(false);
    let record = fetch_with_retry(&test_client(), &target, &policy).await;

    assert!(record.is_none());
}

#[tokio::test]
async fn test_unreachable_host_gives_up() {
    // Nothing listens on port 1
    let target = Target::new("http://127.0.0.1:1/games/offline");
    let record = fetch_with_retry(&test_client(), &target, &RetryPolicy::default()).await;

    assert!(record.is_none());
}
