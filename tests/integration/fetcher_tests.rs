use webcrawler::config::HttpConfig;
use webcrawler::crawler::{Fetcher, HttpFetcher};
use webcrawler::FetchError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> HttpFetcher {
    let config = HttpConfig {
        user_agent: "TestBot/1.0".to_string(),
        timeout_secs: 2,
        connect_timeout_secs: 1,
    };
    HttpFetcher::new(&config).expect("Failed to build fetcher")
}

#[tokio::test]
async fn test_fetch_success_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/about.html"))
        .and(header("user-agent", "TestBot/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>About</title>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = fetcher()
        .fetch(&format!("{}/about.html", mock_server.uri()))
        .await
        .expect("Fetch failed");

    assert_eq!(body, "<title>About</title>");
}

#[tokio::test]
async fn test_fetch_not_found_is_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = fetcher()
        .fetch(&format!("{}/missing", mock_server.uri()))
        .await;

    assert!(matches!(result, Err(FetchError::Status { status: 404, .. })));
}

#[tokio::test]
async fn test_fetch_server_error_is_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let result = fetcher().fetch(&mock_server.uri()).await;

    assert!(matches!(result, Err(FetchError::Status { status: 503, .. })));
}

#[tokio::test]
async fn test_fetch_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let result = fetcher().fetch(&mock_server.uri()).await;

    assert!(matches!(result, Err(FetchError::Timeout { .. })));
}
