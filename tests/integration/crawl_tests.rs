use std::collections::HashMap;
use std::time::Duration;
use webcrawler::config::Config;
use webcrawler::crawler::{crawl, CrawlReport, Crawler};
use webcrawler::output::edges;
use webcrawler::PageRecord;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration crawling `domain`
fn create_test_config(domain: &str, workers: usize, max_depth: usize) -> Config {
    let mut config = Config::default();
    config.crawler.domain = domain.to_string();
    config.crawler.workers = workers;
    config.crawler.max_depth = max_depth;
    config.http.timeout_secs = 5;
    config
}

/// Mounts an HTML page with the given title and anchors
async fn mount_page(server: &MockServer, page_path: &str, title: &str, links: &[&str]) {
    let anchors: String = links
        .iter()
        .map(|l| format!("    <a href=\"{}\">{}</a>\n", l, l))
        .collect();
    let body = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>",
        title, anchors
    );

    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Mounts the small banking test site used by several tests
async fn mount_test_site(server: &MockServer) {
    let home = [
        "/blog.html",
        "/sitemap.html",
        "/account.html",
        "/about.html",
        "https://reddit.com",
    ];
    mount_page(server, "/", "Test Website", &home).await;
    mount_page(server, "/index.html", "Test Website", &home).await;
    mount_page(server, "/about.html", "About", &[]).await;
    mount_page(
        server,
        "/account.html",
        "Account",
        &["/checking.html", "/investments.html", "/savings.html"],
    )
    .await;
    mount_page(server, "/blog.html", "Blog", &["/stories.html"]).await;
    mount_page(server, "/checking.html", "Checking Account Page", &[]).await;
    mount_page(server, "/investments.html", "Investments", &[]).await;
    mount_page(server, "/savings.html", "Savings", &["/index.html"]).await;
    mount_page(server, "/sitemap.html", "Sitemap", &[]).await;
    mount_page(server, "/stories.html", "Stories", &[]).await;
}

async fn run_crawl(config: Config) -> CrawlReport {
    tokio::time::timeout(Duration::from_secs(30), crawl(config))
        .await
        .expect("Crawl did not terminate")
        .expect("Crawl failed")
}

fn record(title: &str, links: &[&str]) -> PageRecord {
    PageRecord::new(title, links.iter().map(|l| l.to_string()).collect())
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    mount_test_site(&mock_server).await;
    let base_url = mock_server.uri();

    let report = run_crawl(create_test_config(&base_url, 3, 4)).await;

    let home = [
        "/blog.html",
        "/sitemap.html",
        "/account.html",
        "/about.html",
    ];
    let mut expected = HashMap::new();
    expected.insert(base_url.clone(), record("Test Website", &home));
    expected.insert(format!("{}/about.html", base_url), record("About", &[]));
    expected.insert(
        format!("{}/account.html", base_url),
        record(
            "Account",
            &["/checking.html", "/investments.html", "/savings.html"],
        ),
    );
    expected.insert(format!("{}/blog.html", base_url), record("Blog", &["/stories.html"]));
    expected.insert(
        format!("{}/checking.html", base_url),
        record("Checking Account Page", &[]),
    );
    expected.insert(format!("{}/index.html", base_url), record("Test Website", &home));
    expected.insert(format!("{}/investments.html", base_url), record("Investments", &[]));
    expected.insert(format!("{}/savings.html", base_url), record("Savings", &["/index.html"]));
    expected.insert(format!("{}/sitemap.html", base_url), record("Sitemap", &[]));
    expected.insert(format!("{}/stories.html", base_url), record("Stories", &[]));

    assert_eq!(report.graph, expected);
    assert_eq!(report.stats.processed, 10);
    assert_eq!(report.stats.failures(), 0);
}

#[tokio::test]
async fn test_default_depth_stops_before_index() {
    let mock_server = MockServer::start().await;
    mount_test_site(&mock_server).await;
    let base_url = mock_server.uri();

    // /index.html is only reachable at depth 3
    let report = run_crawl(create_test_config(&base_url, 3, 3)).await;

    assert_eq!(report.graph.len(), 9);
    assert!(!report.graph.contains_key(&format!("{}/index.html", base_url)));
    assert!(report.stats.skipped_depth >= 1);
}

#[tokio::test]
async fn test_external_link_never_requested() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", "Home", &["/a", "/b", "https://other.example/"]).await;
    mount_page(&mock_server, "/a", "A", &[]).await;
    mount_page(&mock_server, "/b", "B", &[]).await;

    let report = run_crawl(create_test_config(&base_url, 2, 3)).await;

    let mut keys: Vec<_> = report.graph.keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            base_url.clone(),
            format!("{}/a", base_url),
            format!("{}/b", base_url)
        ]
    );
    assert!(!report.graph.keys().any(|k| k.contains("other.example")));
}

#[tokio::test]
async fn test_back_link_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head><title>Home</title></head><body><a href="/a">A</a></body></html>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><head><title>A</title></head><body><a href="{}">Home</a></body></html>"#,
            base_url
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = run_crawl(create_test_config(&base_url, 4, 5)).await;

    assert_eq!(report.graph.len(), 2);
    // The `.expect(1)` counts are verified when the server drops
}

#[tokio::test]
async fn test_broken_page_does_not_stop_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", "Home", &["/broken", "/fine"]).await;
    mount_page(&mock_server, "/fine", "Fine", &["/deeper"]).await;
    mount_page(&mock_server, "/deeper", "Deeper", &[]).await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let report = run_crawl(create_test_config(&base_url, 2, 3)).await;

    assert!(!report.graph.contains_key(&format!("{}/broken", base_url)));
    assert!(report.graph.contains_key(&format!("{}/deeper", base_url)));
    assert_eq!(report.stats.fetch_failures, 1);
    assert_eq!(report.stats.processed, 3);
}

#[tokio::test]
async fn test_unreachable_seed_yields_empty_graph() {
    // Nothing listens on the discard port
    let report = run_crawl(create_test_config("http://127.0.0.1:9", 2, 3)).await;

    assert!(report.graph.is_empty());
    assert_eq!(report.stats.fetch_failures, 1);
    assert_eq!(report.stats.completed, 1);
}

#[tokio::test]
async fn test_edges_listing() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", "Home", &["/a"]).await;
    mount_page(&mock_server, "/a", "A", &["/"]).await;

    let report = run_crawl(create_test_config(&base_url, 2, 2)).await;

    // "/" resolves to a different key than the bare seed; depth 2 is not fetched
    assert_eq!(
        edges(&report.graph, &base_url),
        vec![
            (base_url.clone(), format!("{}/a", base_url)),
            (format!("{}/a", base_url), format!("{}/", base_url)),
        ]
    );
}

#[tokio::test]
async fn test_crawler_with_custom_span() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_page(&mock_server, "/", "Home", &[]).await;

    let crawler = Crawler::new(create_test_config(&base_url, 1, 1))
        .expect("Failed to create crawler")
        .with_span(tracing::info_span!("test-crawl"));
    let graph = crawler.graph();
    let report = crawler.run().await.expect("Crawl failed");

    assert_eq!(report.graph.len(), 1);
    assert_eq!(graph.len(), 1);
    assert_eq!(report.graph[&base_url].title, "Home");
}
