//! Fingerprints identifying a URL's dedup-relevant shape.
//!
//! Two URLs share a fingerprint when they have the same host, the same decoded path and the
//! same *set* of query parameter names. Parameter order, values and repetitions are ignored.
//!
//! The canonical string is `host-path-keys` with `-` as separator, so a host or path that
//! itself contains `-` can in principle collide with a different split. A collision only
//! makes deduplication more aggressive.

use sha2::{Digest, Sha256};

use crate::models::{Fingerprint, ParsedUrl};

/// Maximum number of `-` allowed in one path segment
pub const MAX_SEGMENT_HYPHENS: usize = 3;

/// Compute the fingerprint of a parsed URL
///
/// Returns `None` when the path fails the shape guard; such URLs are dropped outright.
///
/// # Examples
///
/// ```
/// use url_sieve::dedup::fingerprint::fingerprint;
/// use url_sieve::parsers::parse_url;
///
/// let a = parse_url("http://a.com/p?b=1&a=2").unwrap();
/// let b = parse_url("http://a.com/p?a=9&b=9").unwrap();
/// assert_eq!(fingerprint(&a, 100), fingerprint(&b, 100));
/// ```
pub fn fingerprint(url: &ParsedUrl, path_limit: usize) -> Option<Fingerprint> {
    if !passes_shape_guard(&url.path, path_limit) {
        return None;
    }

    let digest = Sha256::digest(canonical_form(url).as_bytes());
    Some(Fingerprint::new(hex::encode(digest)))
}

/// Reject paths with an overlong segment or a hyphen-heavy slug
///
/// Every segment is inspected, including the empty ones produced by leading, trailing or
/// doubled slashes. A path without any `/` is not inspected at all.
pub fn passes_shape_guard(path: &str, path_limit: usize) -> bool {
    if !path.contains('/') {
        return true;
    }

    path.split('/').all(|segment| {
        segment.len() <= path_limit && segment.matches('-').count() <= MAX_SEGMENT_HYPHENS
    })
}

fn canonical_form(url: &ParsedUrl) -> String {
    // BTreeSet iterates in sorted order
    let keys = url.query_keys.iter().map(String::as_str).collect::<Vec<_>>().join("-");
    format!("{}-{}-{}", url.host, url.path, keys)
}
