//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer.

mod extract;
pub(crate) mod handlers;
mod server;

pub use extract::PaymentJson;
pub use handlers::{ApiError, AppState};
pub use server::HttpServer;
