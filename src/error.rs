use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures detected by the relay, converted to the structured `{"error": _}`
/// payload at the boundary. Target-side 4xx/5xx statuses are not errors.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("URL is required")]
    MissingUrl,

    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid method: {0}")]
    InvalidMethod(String),

    #[error("{0}")]
    Outbound(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            RelayError::MissingUrl
            | RelayError::InvalidPayload(_)
            | RelayError::InvalidMethod(_) => StatusCode::BAD_REQUEST,
            RelayError::Outbound(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, [(header::CACHE_CONTROL, "no-store")], body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_maps_to_400() {
        let response = RelayError::MissingUrl.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn outbound_failure_maps_to_500_with_no_store() {
        let response = RelayError::Outbound("dns failure".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
    }

    #[test]
    fn messages_carry_underlying_detail() {
        assert_eq!(RelayError::MissingUrl.to_string(), "URL is required");
        assert_eq!(
            RelayError::Outbound("connection refused".to_string()).to_string(),
            "connection refused"
        );
        assert_eq!(
            RelayError::InvalidMethod("NOT A VERB".to_string()).to_string(),
            "Invalid method: NOT A VERB"
        );
    }
}
