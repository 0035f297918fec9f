//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use farmalink_types::domain::Payment;
use farmalink_types::dto::{CreatePaymentRequest, HealthReport, ServiceInfo};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    )
)]
async fn root() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "API and storage status", body = HealthReport,
         example = json!({"api": "healthy", "storage": "healthy"}))
    )
)]
async fn health() {}

/// Register a payment
///
/// The payment date is assigned by the server; any date sent by the client is ignored.
#[utoipa::path(
    post,
    path = "/api/pagos/realizar",
    tag = "pagos",
    request_body = CreatePaymentRequest,
    responses(
        (status = 200, description = "Payment registered", body = Payment),
        (status = 400, description = "Body is not valid JSON"),
        (status = 422, description = "Missing or malformed field",
         example = json!({"error": "missing field `holder_id`", "code": 422, "field": "holder_id"}))
    )
)]
async fn create_payment() {}

/// List all payments
#[utoipa::path(
    get,
    path = "/api/pagos/",
    tag = "pagos",
    responses(
        (status = 200, description = "Every payment, oldest first", body = Vec<Payment>)
    )
)]
async fn list_payments() {}

/// OpenAPI documentation for the FarmaLink payments API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FarmaLink API",
        version = "0.2.0",
        description = "Pharmacy management backend: payments to workers.\n\nPayments are append-only. Each one is dated by the server on the day it is registered.",
        license(name = "MIT"),
    ),
    paths(root, health, create_payment, list_payments),
    components(schemas(Payment, CreatePaymentRequest, ServiceInfo, HealthReport)),
    tags(
        (name = "health", description = "Service status endpoints"),
        (name = "pagos", description = "Payment registration and history"),
    )
)]
pub struct ApiDoc;
