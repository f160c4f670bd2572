//! Query string construction shared by every endpoint module.
//!
//! Responsibilities:
//! - Join optional `key=value` fragments into one query string.
//! - Hold ordered `(key, Option<value>)` pairs and render them with a single encoder.
//!
//! Does NOT handle:
//! - Path segment encoding (see [`super::url_encoding`]).
//!
//! Invariants:
//! - Absent and empty fragments are dropped before joining, so the output never
//!   has a leading, trailing, or doubled `&`.
//! - Pair order is preserved exactly as pushed.
//! - Keys are emitted verbatim (`filter[name]`, `names[]`); only values are encoded.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters percent-encoded inside query values.
///
/// `[`, `]`, `,`, `:` and `;` stay literal because the API's list filters
/// (`filter[ids]=1,2`, `filter[labels]=Env:prod;Team:web`) use them as syntax.
const QUERY_VALUE_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^');

/// Join the present, non-empty fragments with `&`, preserving order.
///
/// All-absent input yields an empty string.
///
/// ```
/// use newrelic_client::endpoints::query::build_param_string;
///
/// let params = build_param_string([Some("filter[name]=dev"), None, Some("page=1")]);
/// assert_eq!(params, "filter[name]=dev&page=1");
/// ```
pub fn build_param_string<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for fragment in fragments.into_iter().flatten() {
        let fragment = fragment.as_ref();
        if fragment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(fragment);
    }
    out
}

/// Ordered query parameters with optional values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.pairs.push((key.into(), Some(value.to_string())));
        self
    }

    /// Append a parameter that is omitted when `None`.
    pub fn push_opt<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
        self.pairs.push((key.into(), value.map(|v| v.to_string())));
        self
    }

    /// Append a comma-joined list, omitted when `values` is empty.
    pub fn push_joined<V: ToString>(&mut self, key: impl Into<String>, values: &[V]) -> &mut Self {
        let joined = (!values.is_empty()).then(|| {
            values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        });
        self.pairs.push((key.into(), joined));
        self
    }

    /// Append one `key=value` pair per element (`names[]=a&names[]=b`).
    pub fn push_each<V: ToString>(&mut self, key: &str, values: &[V]) -> &mut Self {
        for value in values {
            self.pairs.push((key.to_string(), Some(value.to_string())));
        }
        self
    }

    /// True when no pair would be rendered.
    pub fn is_empty(&self) -> bool {
        !self
            .pairs
            .iter()
            .any(|(_, v)| v.as_deref().is_some_and(|v| !v.is_empty()))
    }

    /// Render as a wire query string (no leading `?`).
    pub fn encode(&self) -> String {
        build_param_string(self.pairs.iter().map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}={}", key, utf8_percent_encode(v, QUERY_VALUE_ENCODE_SET)))
        }))
    }
}
