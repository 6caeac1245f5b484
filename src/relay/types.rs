use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::RelayError;

/// Incoming relay request from the frontend composer.
///
/// Every field defaults when absent so that shape problems surface as our own
/// structured errors instead of a deserializer rejection: a missing `url`
/// must come back as `"URL is required"`, not a serde message.
#[derive(Debug, Deserialize)]
pub struct RelayRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl RelayRequest {
    /// Validates an untyped JSON payload against the relay request shape.
    ///
    /// Mistyped fields (non-string header values, non-object `headers`) are
    /// client-input errors; unknown fields are ignored.
    pub fn from_value(value: serde_json::Value) -> Result<Self, RelayError> {
        serde_json::from_value(value).map_err(|e| RelayError::InvalidPayload(e.to_string()))
    }
}

/// Normalized envelope returned to the frontend on a completed relay attempt.
///
/// `headers` carries the target's response headers plus the three synthetic
/// entries (`x-request-url`, `x-request-method`, `x-response-time`) injected
/// by the executor. A 4xx/5xx `status` from the target is still a successful
/// envelope.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}
