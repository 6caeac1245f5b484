pub mod config;
pub mod error;
pub mod relay;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub use config::Config;
pub use error::RelayError;
pub use relay::{execute_request, OutboundClient, RelayRequest, RelayResponse, ReqwestClient};

/// Builds the application router around an injected outbound client.
pub fn app(client: Arc<dyn OutboundClient>) -> Router {
    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/relay", post(routes::relay::relay_request))
        .fallback(routes::static_files::serve_static)
        .with_state(client)
}
