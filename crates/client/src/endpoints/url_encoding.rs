//! Path segment encoding for caller-supplied identifiers.
//!
//! Numeric ids are interpolated as-is; string keys (label keys such as
//! `Environment:Production`) go through [`encode_path_segment`] so that a
//! `/`, `?` or `#` inside the key cannot change the request path.
//!
//! # Example
//!
//! ```
//! use newrelic_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("Team:Web/Ops");
//! assert_eq!(encoded, "Team:Web%2FOps");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 plus the characters that would split or
/// re-route the path.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')      // Space
    .add(b'"')      // Double quote
    .add(b'<')      // Less than
    .add(b'>')      // Greater than
    .add(b'`')      // Backtick
    .add(b'{')      // Left curly brace
    .add(b'}')      // Right curly brace
    .add(b'|')      // Pipe
    .add(b'\\')     // Backslash
    .add(b'^')      // Caret
    .add(b'%')      // Percent (prevents double-decoding)
    .add(b'/')      // Forward slash (prevents path traversal)
    .add(b'?')      // Question mark
    .add(b'#')      // Hash
    .add(b'+')      // Plus
    .add(b'[')      // Left square bracket
    .add(b']'); // Right square bracket

/// Percent-encode a string for safe use as a URL path segment.
///
/// ```
/// use newrelic_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("Environment:Production"), "Environment:Production");
/// assert_eq!(encode_path_segment("Team:Blue Green"), "Team:Blue%20Green");
/// assert_eq!(encode_path_segment("100%"), "100%25");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}
