//! Sitemap line extraction
//!
//! No XML parsing: each line that mentions `http` and is not namespace
//! boilerplate becomes one URL once the `<loc>`/`<sitemap>` tags are removed.

use crate::output::SitemapRecord;

/// Lines containing any of these are schema noise
const NOISE: [&str; 3] = ["xmlns", "xsi:", "www.sitemaps"];

/// Tags removed from a kept line
const TAGS: [&str; 4] = ["</sitemap>", "<sitemap>", "<loc>", "</loc>"];

/// Extracts one URL per qualifying line
pub fn extract_sitemap_urls(content: &str) -> Vec<String> {
    content
        .split(|c: char| c == '\n' || c == '\r')
        .filter(|line| !NOISE.iter().any(|noise| line.contains(noise)))
        .filter(|line| line.contains("http"))
        .map(|line| {
            TAGS.iter()
                .fold(line.to_string(), |acc, tag| acc.replace(tag, ""))
                .trim()
                .to_string()
        })
        .collect()
}

/// Parses a sitemap body into records attributed to `sitemap_url`
pub fn parse_sitemap(content: &str, sitemap_url: &str) -> Vec<SitemapRecord> {
    extract_sitemap_urls(content)
        .into_iter()
        .map(|url| SitemapRecord::new(sitemap_url, url))
        .collect()
}

/// Whether an extracted URL points at another sitemap file
pub fn is_sitemap_link(url: &str) -> bool {
    (url.starts_with("http://") || url.starts_with("https://"))
        && (url.ends_with(".xml") || url.ends_with(".xml.gz"))
}
