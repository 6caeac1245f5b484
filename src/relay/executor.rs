//! Relay request execution.
//!
//! Validates the incoming request, issues a single outbound HTTP call through
//! the injected client, and normalizes the outcome into a `RelayResponse`
//! envelope with the synthetic metadata headers. Target-side error statuses
//! pass through as data; only a failed outbound attempt is an error.

use super::client::{DecodedBody, OutboundCall, OutboundClient};
use super::types::{RelayRequest, RelayResponse};
use crate::error::RelayError;
use reqwest::Method;
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Instant;

/// Synthetic headers injected into every successful envelope. They overwrite
/// same-named headers from the target.
pub const HEADER_REQUEST_URL: &str = "x-request-url";
pub const HEADER_REQUEST_METHOD: &str = "x-request-method";
pub const HEADER_RESPONSE_TIME: &str = "x-response-time";

/// Substituted body when the target's body cannot be decoded as text.
pub const BODY_READ_FALLBACK: &str = "Could not read response body";

/// Executes a relay request end to end.
///
/// The request is consumed exactly once; there are no retries and no partial
/// responses. `x-response-time` measures from just before the outbound send
/// until the response head arrives.
pub async fn execute_request(
    client: &dyn OutboundClient,
    request: RelayRequest,
) -> Result<RelayResponse, RelayError> {
    if request.url.is_empty() {
        return Err(RelayError::MissingUrl);
    }

    let method = resolve_method(&request.method)?;

    // Bodyless methods never carry a payload, even if the caller sent one.
    let body = if method == Method::GET || method == Method::HEAD {
        None
    } else {
        request.body
    };

    let call = OutboundCall {
        method: method.clone(),
        url: request.url.clone(),
        headers: request.headers,
        body,
    };

    let started = Instant::now();
    let reply = client.send(call).await.map_err(RelayError::Outbound)?;
    let elapsed = started.elapsed().as_millis() as u64;

    let mut headers: HashMap<String, String> = reply.headers.into_iter().collect();
    headers.insert(HEADER_REQUEST_URL.to_string(), request.url);
    headers.insert(HEADER_REQUEST_METHOD.to_string(), method.to_string());
    headers.insert(HEADER_RESPONSE_TIME.to_string(), format!("{elapsed}ms"));

    let body = match reply.body.await {
        DecodedBody::Text(text) => text,
        DecodedBody::Unreadable => BODY_READ_FALLBACK.to_string(),
    };

    Ok(RelayResponse {
        status: reply.status,
        status_text: reply.status_text,
        headers,
        body,
    })
}

/// Resolves the raw verb: empty defaults to GET, anything else is
/// upper-cased and parsed.
fn resolve_method(raw: &str) -> Result<Method, RelayError> {
    if raw.is_empty() {
        return Ok(Method::GET);
    }
    Method::from_str(&raw.to_uppercase()).map_err(|_| RelayError::InvalidMethod(raw.to_string()))
}
