//! Record types produced by the fetchers
//!
//! Each fetcher has its own record shape. For the combined export both are
//! mapped onto [`OutputRow`], with empty strings for the fields a shape does
//! not have.

use serde::Serialize;

/// Which extractor produced a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceKind {
    #[serde(rename = "robots.txt")]
    Robots,
    #[serde(rename = "sitemap.xml")]
    Sitemap,
}

/// Permission carried by a robots.txt line
///
/// `Sitemap:` lines are recorded as [`Permission::Disallow`]. Downstream
/// consumers of the CSV rely on that bucket, so it is kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Permission {
    Allow,
    Disallow,
    /// No directive set a permission on this line
    #[default]
    #[serde(rename = "")]
    None,
}

/// One processed robots.txt line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotsRecord {
    #[serde(rename = "Extractor")]
    pub source_kind: SourceKind,

    /// Most recent `User-agent:` value seen in this file
    #[serde(rename = "UserAgent")]
    pub user_agent: String,

    #[serde(rename = "Permission")]
    pub permission: Permission,

    /// The raw line as it appeared in the file
    #[serde(rename = "Original")]
    pub original_line: String,

    /// Directive value, made absolute when it started with `/`
    #[serde(rename = "ExtractedUrl")]
    pub extracted_path: String,
}

/// One URL line found in a sitemap resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapRecord {
    #[serde(rename = "Extractor")]
    pub source_kind: SourceKind,

    /// The sitemap URL the line was found in
    #[serde(rename = "Sitemap")]
    pub sitemap_url: String,

    #[serde(rename = "ExtractedUrl")]
    pub extracted_url: String,
}

impl SitemapRecord {
    pub fn new(sitemap_url: impl Into<String>, extracted_url: impl Into<String>) -> Self {
        Self {
            source_kind: SourceKind::Sitemap,
            sitemap_url: sitemap_url.into(),
            extracted_url: extracted_url.into(),
        }
    }
}

/// A row of the combined export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    #[serde(rename = "Extractor")]
    pub source_kind: SourceKind,
    #[serde(rename = "UserAgent")]
    pub user_agent: String,
    #[serde(rename = "Permission")]
    pub permission: Permission,
    #[serde(rename = "Original")]
    pub original_line: String,
    #[serde(rename = "ExtractedUrl")]
    pub extracted_url: String,
    #[serde(rename = "Sitemap")]
    pub sitemap_url: String,
}

impl From<RobotsRecord> for OutputRow {
    fn from(record: RobotsRecord) -> Self {
        Self {
            source_kind: record.source_kind,
            user_agent: record.user_agent,
            permission: record.permission,
            original_line: record.original_line,
            extracted_url: record.extracted_path,
            sitemap_url: String::new(),
        }
    }
}

impl From<SitemapRecord> for OutputRow {
    fn from(record: SitemapRecord) -> Self {
        Self {
            source_kind: record.source_kind,
            user_agent: String::new(),
            permission: Permission::None,
            original_line: String::new(),
            extracted_url: record.extracted_url,
            sitemap_url: record.sitemap_url,
        }
    }
}

/// Merges both collections, robots rows first, each keeping its own order
pub fn merge(robots: Vec<RobotsRecord>, sitemaps: Vec<SitemapRecord>) -> Vec<OutputRow> {
    robots
        .into_iter()
        .map(OutputRow::from)
        .chain(sitemaps.into_iter().map(OutputRow::from))
        .collect()
}
