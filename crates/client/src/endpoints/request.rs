//! Shared request/response wrapper for every endpoint.
//!
//! Responsibilities:
//! - Build the request URL from a base URL, a relative path and [`QueryParams`].
//! - Attach `X-Api-Key` and `Content-Type: application/json` to every request.
//! - Translate non-success statuses into [`ClientError::Server`].
//! - Decode JSON object bodies into an [`Envelope`], surfacing `Link` pagination as `pages`.
//!
//! Does NOT handle:
//! - Retries, backoff, caching. Every call is a single attempt.
//!
//! Invariants:
//! - A non-2xx response never yields a partially decoded envelope.
//! - `delete` and `put` accept an empty body and return an empty envelope.
//! - The API key is only ever exposed as a header value; it is never logged.

use std::time::Instant;

use reqwest::header::{CONTENT_TYPE, LINK};
use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::endpoints::pagination::parse_link_header;
use crate::endpoints::query::QueryParams;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Decoded JSON response body.
pub type Envelope = Map<String, Value>;

/// Header carrying the account API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Maximum number of body bytes echoed into warning logs.
const LOG_BODY_LIMIT: usize = 512;

/// Join a base URL (ending in `/`) with a relative path and encoded query.
pub fn build_url(base_url: &str, path: &str, params: &QueryParams) -> Result<Url> {
    let mut raw = format!("{}{}", base_url, path);
    let query = params.encode();
    if !query.is_empty() {
        raw.push(if raw.contains('?') { '&' } else { '?' });
        raw.push_str(&query);
    }

    Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))
}

/// Issue a GET and decode the body, attaching `pages` when a `Link` header is present.
pub async fn get(
    client: &Client,
    base_url: &str,
    path: &str,
    api_key: &str,
    params: &QueryParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let response = send(
        client,
        Method::GET,
        base_url,
        path,
        api_key,
        params,
        None::<&()>,
        metrics,
    )
    .await?;

    let pages = response
        .headers()
        .get(LINK)
        .and_then(|h| h.to_str().ok())
        .map(parse_link_header)
        .filter(|pages| !pages.is_empty());

    let mut envelope = decode_envelope(response, path, "GET", false, metrics).await?;
    if let Some(pages) = pages {
        envelope.insert("pages".to_string(), Value::Object(pages));
    }
    Ok(envelope)
}

/// Issue a POST with a JSON body.
pub async fn post<T>(
    client: &Client,
    base_url: &str,
    path: &str,
    api_key: &str,
    params: &QueryParams,
    body: &T,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope>
where
    T: Serialize + ?Sized,
{
    let response = send(
        client,
        Method::POST,
        base_url,
        path,
        api_key,
        params,
        Some(body),
        metrics,
    )
    .await?;
    decode_envelope(response, path, "POST", false, metrics).await
}

/// Issue a PUT, with a JSON body when one is given.
pub async fn put<T>(
    client: &Client,
    base_url: &str,
    path: &str,
    api_key: &str,
    params: &QueryParams,
    body: Option<&T>,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope>
where
    T: Serialize + ?Sized,
{
    let response = send(
        client,
        Method::PUT,
        base_url,
        path,
        api_key,
        params,
        body,
        metrics,
    )
    .await?;
    decode_envelope(response, path, "PUT", true, metrics).await
}

/// Issue a DELETE. An empty success body yields an empty envelope.
pub async fn delete(
    client: &Client,
    base_url: &str,
    path: &str,
    api_key: &str,
    params: &QueryParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let response = send(
        client,
        Method::DELETE,
        base_url,
        path,
        api_key,
        params,
        None::<&()>,
        metrics,
    )
    .await?;
    decode_envelope(response, path, "DELETE", true, metrics).await
}

/// Send one request and reject non-success statuses.
#[allow(clippy::too_many_arguments)]
async fn send<T>(
    client: &Client,
    method: Method,
    base_url: &str,
    path: &str,
    api_key: &str,
    params: &QueryParams,
    body: Option<&T>,
    metrics: Option<&MetricsCollector>,
) -> Result<Response>
where
    T: Serialize + ?Sized,
{
    let url = build_url(base_url, path, params)?;
    let method_label = method.as_str().to_string();

    debug!(
        method = %method_label,
        path,
        query_len = url.query().map_or(0, str::len),
        "Sending New Relic API request"
    );

    let mut builder = client
        .request(method, url)
        .header(API_KEY_HEADER, api_key)
        .header(CONTENT_TYPE, "application/json");
    if let Some(body) = body {
        builder = builder.json(body);
    }

    if let Some(m) = metrics {
        m.record_request(path, &method_label);
    }
    let start = Instant::now();

    let response = match builder.send().await {
        Ok(response) => response,
        Err(e) => {
            let err = ClientError::from(e);
            if let Some(m) = metrics {
                m.record_request_duration(path, &method_label, start.elapsed(), None);
                m.record_client_error(path, &method_label, &err);
            }
            return Err(err);
        }
    };

    let status = response.status().as_u16();
    if let Some(m) = metrics {
        m.record_request_duration(path, &method_label, start.elapsed(), Some(status));
    }

    if response.status().is_success() {
        debug!(method = %method_label, path, status, "New Relic API request succeeded");
        return Ok(response);
    }

    let url = response.url().to_string();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    warn!(
        method = %method_label,
        path,
        status,
        body = %truncate(&message, LOG_BODY_LIMIT),
        "New Relic API returned an error status"
    );

    let err = ClientError::Server {
        status,
        url,
        message,
    };
    if let Some(m) = metrics {
        m.record_client_error(path, &method_label, &err);
    }
    Err(err)
}

/// Decode a success body into an [`Envelope`].
async fn decode_envelope(
    response: Response,
    path: &str,
    method: &str,
    allow_empty: bool,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let text = response.text().await?;

    let result = if text.trim().is_empty() {
        if allow_empty {
            Ok(Envelope::new())
        } else {
            Err(ClientError::InvalidResponse(
                "empty response body".to_string(),
            ))
        }
    } else {
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(ClientError::InvalidResponse(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
            Err(e) => Err(ClientError::InvalidResponse(format!(
                "failed to decode JSON body: {}",
                e
            ))),
        }
    };

    if let (Err(err), Some(m)) = (&result, metrics) {
        m.record_client_error(path, method, err);
    }
    result
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Truncate to at most `limit` bytes on a char boundary.
fn truncate(s: &str, limit: usize) -> &str {
    if s.len() <= limit {
        return s;
    }
    let mut end = limit;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
