//! # FarmaLink Hex
//!
//! Application service layer and HTTP adapter for the payments service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (the payment registry operations)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served at `/docs`
//!
//! The service is generic over `R: PaymentRepository`, allowing
//! different registry implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::PaymentService;
