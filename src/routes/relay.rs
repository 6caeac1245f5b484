use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::error::RelayError;
use crate::relay::{execute_request, OutboundClient, RelayRequest};

pub async fn relay_request(
    State(client): State<Arc<dyn OutboundClient>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<impl IntoResponse, RelayError> {
    let Json(payload) = payload.map_err(|e| RelayError::InvalidPayload(e.body_text()))?;
    let request = RelayRequest::from_value(payload)?;

    tracing::debug!(
        method = %request.method,
        url = %request.url,
        "Relaying request"
    );

    match execute_request(client.as_ref(), request).await {
        Ok(response) => {
            tracing::debug!(status = response.status, "Relay completed");
            Ok(([(header::CACHE_CONTROL, "no-store")], Json(response)))
        }
        Err(error) => {
            tracing::warn!(%error, "Relay failed");
            Err(error)
        }
    }
}
