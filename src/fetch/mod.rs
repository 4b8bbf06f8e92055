//! HTTP fetching shared by the robots and sitemap fetchers
//!
//! This module contains:
//! - HTTP client construction and single-resource GETs
//! - Error classification (timeout, transport)
//! - Gzip detection and body decoding
//! - The admission gate that bounds concurrent fetches

mod client;
mod decode;
mod gate;

pub use client::{build_http_client, fetch_resource, FetchOutcome};
pub use decode::{gunzip_text, is_gzip};
pub use gate::AdmissionGate;

/// Drops a single trailing `/` from a base URL
pub fn trim_base(base_url: &str) -> &str {
    base_url.strip_suffix('/').unwrap_or(base_url)
}
