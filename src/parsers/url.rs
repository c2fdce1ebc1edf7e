use std::collections::BTreeSet;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::models::ParsedUrl;

/// Parse a candidate string into the parts that identify its shape
///
/// The URL parser validates the candidate and supplies the path and query, but the host is
/// taken verbatim from the candidate's authority: no case folding, no IDNA mapping.
///
/// Returns `None` for anything the URL parser rejects (including relative references),
/// for URLs without a host, e.g. `mailto:` or `file:///`, and for scheme-relative forms
/// like `http:example.com` that carry no `//` authority.
pub fn parse_url(raw: &str) -> Option<ParsedUrl> {
    let url = Url::parse(raw).ok()?;
    url.host()?;

    let host = written_hostname(raw, url.scheme())?;
    if host.is_empty() {
        return None;
    }

    let path = percent_decode_str(url.path()).decode_utf8_lossy().into_owned();
    let query_keys: BTreeSet<String> = url.query_pairs().map(|(key, _)| key.into_owned()).collect();

    Some(ParsedUrl { host: host.to_string(), path, query_keys })
}

/// Hostname as written after `scheme://`, without userinfo, port or IPv6 brackets
fn written_hostname<'a>(raw: &'a str, scheme: &str) -> Option<&'a str> {
    let (written_scheme, rest) = raw.split_once("://")?;
    if !written_scheme.eq_ignore_ascii_case(scheme) {
        return None;
    }

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host_port)| host_port);

    if let Some(bracketed) = host_port.strip_prefix('[') {
        return bracketed.split_once(']').map(|(host, _)| host);
    }
    Some(host_port.rsplit_once(':').map_or(host_port, |(host, _)| host))
}
