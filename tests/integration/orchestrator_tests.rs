use crate::{silent_console, urlset};
use mapboy::{run, Config, MapboyError, Mode, RunOptions};
use std::path::Path;
use tempfile::{tempdir, TempDir};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config whose wildcard file lives in the temp dir
fn create_test_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.output.wildcards_path = dir
        .path()
        .join("wildcards.txt")
        .to_string_lossy()
        .into_owned();
    config
}

fn options(url: &str, dir: &TempDir, mode: Mode) -> RunOptions {
    RunOptions {
        url: url.to_string(),
        output: dir.path().join("scan.csv").to_string_lossy().into_owned(),
        mode,
    }
}

async fn mount_site(mock_server: &MockServer) {
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "User-agent: *\nDisallow: /foo/*\nAllow: /bar\n",
        ))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(urlset(&[
            format!("{}/page", base_url),
            format!("{}/tags/*", base_url),
        ])))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_combined_run() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server).await;
    let base_url = mock_server.uri();

    let dir = tempdir().expect("tempdir");
    let config = create_test_config(&dir);
    let summary = run(
        &options(&format!("{}/", base_url), &dir, Mode::Combined),
        &config,
        silent_console(),
    )
    .await
    .expect("run failed");

    assert_eq!(summary.robots_records, 3);
    assert_eq!(summary.sitemap_records, 2);
    assert_eq!(summary.wildcards, 2);

    let combined = dir.path().join("scan.csv");
    assert_eq!(summary.files, vec![combined.clone()]);

    let content = std::fs::read_to_string(&combined).expect("read combined");
    let expected = format!(
        "Extractor,UserAgent,Permission,Original,ExtractedUrl,Sitemap\n\
         robots.txt,*,,User-agent: *,,\n\
         robots.txt,*,Disallow,Disallow: /foo/*,{0}/foo/*,\n\
         robots.txt,*,Allow,Allow: /bar,{0}/bar,\n\
         sitemap.xml,,,,{0}/page,{0}/sitemap.xml\n\
         sitemap.xml,,,,{0}/tags/*,{0}/sitemap.xml\n",
        base_url
    );
    assert_eq!(content, expected);

    let wildcards = std::fs::read_to_string(dir.path().join("wildcards.txt")).expect("read wildcards");
    assert_eq!(wildcards, "foo/*\ntags/*\n");
}

#[tokio::test]
async fn test_wildcards_append_across_runs() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server).await;

    let dir = tempdir().expect("tempdir");
    let config = create_test_config(&dir);
    let opts = options(&mock_server.uri(), &dir, Mode::Combined);

    run(&opts, &config, silent_console()).await.expect("first run");
    run(&opts, &config, silent_console()).await.expect("second run");

    let wildcards = std::fs::read_to_string(dir.path().join("wildcards.txt")).expect("read wildcards");
    assert_eq!(wildcards, "foo/*\ntags/*\nfoo/*\ntags/*\n");
}

#[tokio::test]
async fn test_robots_only_run() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server).await;

    let dir = tempdir().expect("tempdir");
    let config = create_test_config(&dir);
    let summary = run(
        &options(&mock_server.uri(), &dir, Mode::RobotsOnly),
        &config,
        silent_console(),
    )
    .await
    .expect("run failed");

    assert_eq!(summary.robots_records, 3);
    assert_eq!(summary.sitemap_records, 0);
    assert_eq!(summary.files, vec![dir.path().join("scan-robots.csv")]);
    assert!(!dir.path().join("wildcards.txt").exists());

    // Only robots.txt was requested
    let requests = mock_server.received_requests().await.expect("recording");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_sitemap_only_run() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server).await;

    let dir = tempdir().expect("tempdir");
    let config = create_test_config(&dir);
    let summary = run(
        &options(&mock_server.uri(), &dir, Mode::SitemapOnly),
        &config,
        silent_console(),
    )
    .await
    .expect("run failed");

    assert_eq!(summary.sitemap_records, 2);
    assert_eq!(summary.files.len(), 1);

    let name = summary.files[0]
        .file_name()
        .and_then(|n| n.to_str())
        .expect("file name")
        .to_string();
    assert!(name.starts_with("scan_"), "unexpected name {}", name);
    assert!(name.ends_with(".csv"));
    // scan_YYYYMMDD-HHMMSS.csv
    assert_eq!(name.len(), "scan_20220301-010203.csv".len());

    let content = std::fs::read_to_string(&summary.files[0]).expect("read export");
    assert!(content.starts_with("Extractor,Sitemap,ExtractedUrl\n"));
    assert!(!dir.path().join("wildcards.txt").exists());
}

#[tokio::test]
async fn test_unreachable_site_still_exports() {
    let dir = tempdir().expect("tempdir");
    let config = create_test_config(&dir);
    let summary = run(
        &options("http://127.0.0.1:9", &dir, Mode::Combined),
        &config,
        silent_console(),
    )
    .await
    .expect("run should not fail on fetch errors");

    assert_eq!(summary.robots_records, 0);
    assert_eq!(summary.sitemap_records, 0);

    let content = std::fs::read_to_string(dir.path().join("scan.csv")).expect("read combined");
    assert_eq!(content, "Extractor,UserAgent,Permission,Original,ExtractedUrl,Sitemap\n");
}

#[tokio::test]
async fn test_export_failure_does_not_fail_run() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server).await;

    let dir = tempdir().expect("tempdir");
    let config = create_test_config(&dir);
    let opts = RunOptions {
        url: mock_server.uri(),
        output: Path::new("/nonexistent-dir/scan.csv")
            .to_string_lossy()
            .into_owned(),
        mode: Mode::RobotsOnly,
    };

    let summary = run(&opts, &config, silent_console()).await.expect("run failed");
    assert_eq!(summary.robots_records, 3);
    assert!(summary.files.is_empty());
}

#[tokio::test]
async fn test_exclusive_flags_scan_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempdir().expect("tempdir");
    let config = create_test_config(&dir);
    let summary = run(
        &options(&mock_server.uri(), &dir, Mode::from_flags(true, true)),
        &config,
        silent_console(),
    )
    .await
    .expect("run failed");

    assert_eq!(summary.robots_records, 0);
    assert_eq!(summary.sitemap_records, 0);
    assert!(summary.files.is_empty());
    let entries = std::fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(entries, 0);
}

#[tokio::test]
async fn test_invalid_url_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let config = create_test_config(&dir);
    let result = run(
        &options("example.com", &dir, Mode::Combined),
        &config,
        silent_console(),
    )
    .await;

    assert!(matches!(result, Err(MapboyError::InvalidUrl(_))));
}
