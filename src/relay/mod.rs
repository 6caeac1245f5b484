pub mod client;
pub mod executor;
pub mod types;

pub use client::{OutboundClient, ReqwestClient};
pub use executor::execute_request;
pub use types::{RelayRequest, RelayResponse};
