//! Outbound HTTP client abstraction.
//!
//! The relay executes exactly one outbound request per invocation through an
//! injected `OutboundClient`, so tests can substitute a mock and assert on
//! what was (or was not) sent without real sockets.

use reqwest::Method;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A fully resolved outbound request: method already defaulted and
/// upper-cased, body already dropped for bodyless methods.
#[derive(Debug, Clone)]
pub struct OutboundCall {
    pub method: Method,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

/// Result of decoding a response body as text.
///
/// `Unreadable` covers both transport failures while draining the body and
/// non-UTF-8 content; the executor maps it to the placeholder body string
/// rather than an error.
#[derive(Debug)]
pub enum DecodedBody {
    Text(String),
    Unreadable,
}

/// Response head plus a deferred body decode.
///
/// The head resolves as soon as status and headers arrive, which is the point
/// the executor stops its clock; the body future completes the read
/// afterwards.
pub struct OutboundReply {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: BoxFuture<'static, DecodedBody>,
}

/// Trait for clients that execute outbound HTTP requests on behalf of the
/// relay.
pub trait OutboundClient: Send + Sync {
    /// Sends the call and resolves with the response head once it arrives.
    ///
    /// Errors carry a human-readable message describing the underlying
    /// failure (DNS, connection, TLS, timeout).
    fn send(&self, call: OutboundCall) -> BoxFuture<'_, Result<OutboundReply, String>>;
}

/// Default `OutboundClient` backed by a shared `reqwest::Client`.
///
/// The inner client follows redirects and transparently decompresses
/// gzip/brotli/deflate bodies; it performs no caching, so every send is a
/// fresh network round-trip.
#[derive(Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a client with a bounded per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { inner })
    }

    /// Creates a new client wrapped in an `Arc`.
    pub fn arc(timeout: Duration) -> Result<Arc<Self>, reqwest::Error> {
        Ok(Arc::new(Self::new(timeout)?))
    }
}

impl OutboundClient for ReqwestClient {
    fn send(&self, call: OutboundCall) -> BoxFuture<'_, Result<OutboundReply, String>> {
        let client = self.inner.clone();
        Box::pin(async move {
            let OutboundCall {
                method,
                url,
                headers,
                body,
            } = call;

            let mut builder = client.request(method, url);
            let caller_set_cache_control = headers
                .keys()
                .any(|k| k.eq_ignore_ascii_case("cache-control"));
            for (key, value) in &headers {
                builder = builder.header(key.as_str(), value.as_str());
            }
            if !caller_set_cache_control {
                builder = builder.header("Cache-Control", "no-store");
            }
            if let Some(body) = body {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(|e| e.to_string())?;

            let status = response.status().as_u16();
            let status_text = response
                .status()
                .canonical_reason()
                .unwrap_or("")
                .to_string();
            let headers = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
                .collect();

            let body = Box::pin(async move {
                match response.bytes().await {
                    Ok(bytes) => match String::from_utf8(bytes.to_vec()) {
                        Ok(text) => DecodedBody::Text(text),
                        Err(_) => DecodedBody::Unreadable,
                    },
                    Err(_) => DecodedBody::Unreadable,
                }
            });

            Ok(OutboundReply {
                status,
                status_text,
                headers,
                body,
            })
        })
    }
}
