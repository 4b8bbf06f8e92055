use crate::{silent_console, test_client};
use mapboy::{Permission, RobotsFetcher};
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_robots_fetch_and_parse() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "User-agent: *\nDisallow: /admin\nAllow: /public\nSitemap: /sitemap.xml\n",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut fetcher = RobotsFetcher::new(test_client(), silent_console());
    let added = fetcher.fetch(&base_url).await;

    assert_eq!(added, 4);
    let records = fetcher.records();
    assert_eq!(records[1].permission, Permission::Disallow);
    assert_eq!(records[1].extracted_path, format!("{}/admin", base_url));
    assert_eq!(records[2].permission, Permission::Allow);
    assert_eq!(records[2].extracted_path, format!("{}/public", base_url));
    // Sitemap lines share the Disallow bucket
    assert_eq!(records[3].permission, Permission::Disallow);
    assert_eq!(records[3].extracted_path, format!("{}/sitemap.xml", base_url));
}

#[tokio::test]
async fn test_robots_user_agent_groups() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "User-agent: Googlebot\r\nDisallow: /g1\r\nDisallow: /g2\r\n\r\nUser-agent: *\r\nDisallow: /all\r\n",
        ))
        .mount(&mock_server)
        .await;

    let mut fetcher = RobotsFetcher::new(test_client(), silent_console());
    // Trailing slash on the base is dropped
    fetcher.fetch(&format!("{}/", mock_server.uri())).await;

    let agents: Vec<&str> = fetcher
        .records()
        .iter()
        .map(|r| r.user_agent.as_str())
        .collect();
    assert_eq!(agents, vec!["Googlebot", "Googlebot", "Googlebot", "*", "*"]);
    assert_eq!(
        fetcher.records()[4].extracted_path,
        format!("{}/all", mock_server.uri())
    );
}

#[tokio::test]
async fn test_robots_declared_charset_is_honoured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            b"# Caf\xE9\nUser-agent: *\nDisallow: /admin\n".to_vec(),
            "text/plain; charset=iso-8859-1",
        ))
        .mount(&mock_server)
        .await;

    let mut fetcher = RobotsFetcher::new(test_client(), silent_console());
    let added = fetcher.fetch(&mock_server.uri()).await;

    assert_eq!(added, 3);
    let records = fetcher.records();
    assert_eq!(records[0].original_line, "# Caf\u{e9}");
    assert_eq!(records[2].permission, Permission::Disallow);
    assert_eq!(
        records[2].extracted_path,
        format!("{}/admin", mock_server.uri())
    );
}

#[tokio::test]
async fn test_missing_robots_yields_nothing() {
    // No mocks mounted: every request gets a 404
    let mock_server = MockServer::start().await;

    let mut fetcher = RobotsFetcher::new(test_client(), silent_console());
    let added = fetcher.fetch(&mock_server.uri()).await;

    assert_eq!(added, 0);
    assert!(fetcher.records().is_empty());
}

#[tokio::test]
async fn test_unreachable_host_yields_nothing() {
    let mut fetcher = RobotsFetcher::new(test_client(), silent_console());
    let added = fetcher.fetch("http://127.0.0.1:9").await;
    assert_eq!(added, 0);
}

#[tokio::test]
async fn test_robots_export() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /x"))
        .mount(&mock_server)
        .await;

    let mut fetcher = RobotsFetcher::new(test_client(), silent_console());
    fetcher.fetch(&mock_server.uri()).await;

    let dir = tempdir().expect("tempdir");
    let stem = dir.path().join("scan");
    let written = fetcher
        .export(stem.to_str().expect("utf-8 path"))
        .expect("export failed");

    assert_eq!(written, dir.path().join("scan-robots.csv"));
    let content = std::fs::read_to_string(&written).expect("read export");
    let expected = format!(
        "Extractor,UserAgent,Permission,Original,ExtractedUrl\n\
         robots.txt,*,,User-agent: *,\n\
         robots.txt,*,Disallow,Disallow: /x,{}/x\n",
        mock_server.uri()
    );
    assert_eq!(content, expected);
}
