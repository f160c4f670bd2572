//! `Link` header parsing for paginated list responses.
//!
//! The API advertises further pages with an RFC 8288 header such as
//!
//! ```text
//! Link: <https://api.newrelic.com/v2/applications.json?page=2>; rel="next",
//!       <https://api.newrelic.com/v2/applications.json?page=3>; rel="last"
//! ```
//!
//! which is surfaced to callers as the envelope's `pages` entry:
//! `{"next": {"url": "...", "rel": "next"}, "last": {...}}`.
//!
//! Invariants:
//! - Each link is keyed by its `rel` value, or by its URL when `rel` is absent.
//! - Every link parameter is kept alongside `url` (values unquoted).
//! - Malformed entries are skipped rather than failing the request.

use serde_json::{Map, Value};

/// Parse a `Link` header value into the `pages` mapping.
///
/// Returns an empty map when no well-formed link is present.
pub fn parse_link_header(header: &str) -> Map<String, Value> {
    let mut pages = Map::new();
    let mut rest = header;

    while let Some(start) = rest.find('<') {
        let after_start = &rest[start + 1..];
        let Some(end) = after_start.find('>') else {
            break;
        };
        let url = after_start[..end].trim();
        let tail = &after_start[end + 1..];
        // Parameters run until the next link's opening bracket
        let params_end = tail.find('<').unwrap_or(tail.len());
        let params = &tail[..params_end];
        rest = &tail[params_end..];

        if url.is_empty() {
            continue;
        }

        let mut link = Map::new();
        link.insert("url".to_string(), Value::String(url.to_string()));
        for param in params.split([';', ',']) {
            let Some((key, value)) = param.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            let value = value.trim().trim_matches('"');
            link.insert(key.to_ascii_lowercase(), Value::String(value.to_string()));
        }

        let key = link
            .get("rel")
            .and_then(Value::as_str)
            .unwrap_or(url)
            .to_string();
        pages.insert(key, Value::Object(link));
    }

    pages
}
