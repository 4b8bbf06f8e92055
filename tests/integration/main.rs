//! Integration tests for Mapboy
//!
//! These tests use wiremock to stand up mock sites and drive the fetchers
//! and the orchestrator end-to-end.

mod orchestrator_tests;
mod robots_tests;

use flate2::write::GzEncoder;
use flate2::Compression;
use mapboy::config::FetchConfig;
use mapboy::fetch::build_http_client;
use mapboy::Console;
use reqwest::Client;
use std::io::Write;
use std::sync::Arc;

pub fn silent_console() -> Arc<Console> {
    Arc::new(Console::silent())
}

pub fn test_client() -> Client {
    build_http_client(&FetchConfig::default()).expect("Failed to build client")
}

pub fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).expect("gzip write");
    encoder.finish().expect("gzip finish")
}

pub fn urlset(urls: &[String]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for url in urls {
        xml.push_str(&format!("  <url>\n    <loc>{}</loc>\n  </url>\n", url));
    }
    xml.push_str("</urlset>\n");
    xml
}
