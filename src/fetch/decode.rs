//! Response body decoding
//!
//! Sitemaps are often served as raw `.gz` files with a gzip Content-Type and
//! no Content-Encoding, so the HTTP client does not unpack them. Those bodies
//! are gunzipped here before being decoded as UTF-8. Every other body goes
//! through reqwest's charset-aware text decoding instead.

use crate::{FetchError, FetchResult};
use flate2::read::GzDecoder;
use std::io::Read;

/// Whether a body must be gunzipped before decoding
pub fn is_gzip(url: &str, content_type: &str) -> bool {
    content_type.contains("gzip") || url.ends_with(".gz")
}

/// Gunzips a response body and decodes it as UTF-8
///
/// # Arguments
///
/// * `url` - The URL the body came from (used in errors)
/// * `body` - Raw gzip bytes
///
/// # Returns
///
/// * `Ok(String)` - The decompressed text
/// * `Err(FetchError::Decode)` - Invalid gzip stream or invalid UTF-8
pub fn gunzip_text(url: &str, body: &[u8]) -> FetchResult<String> {
    let bytes = gunzip(body).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        message: format!("gzip: {}", e),
    })?;

    String::from_utf8(bytes).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        message: format!("utf-8: {}", e),
    })
}

fn gunzip(body: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(body);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}
