//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use farmalink_types::{AppError, CreatePaymentRequest, HealthReport, PaymentRepository, ServiceInfo};

use super::extract::PaymentJson;
use crate::PaymentService;

pub const SERVICE_NAME: &str = "FarmaLink API";

/// Application state shared across handlers.
pub struct AppState<R: PaymentRepository> {
    pub service: PaymentService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, field) = match self.0 {
            AppError::MalformedInput { message, field } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message, field)
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Rejected { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST),
                message,
                None,
            ),
            AppError::Internal(msg) => {
                tracing::error!("request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg, None)
            }
        };

        let mut body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });
        if let Some(field) = field {
            body["field"] = serde_json::Value::String(field);
        }

        (status, Json(body)).into_response()
    }
}

/// Service banner.
pub async fn root<R: PaymentRepository>(State(state): State<Arc<AppState<R>>>) -> impl IntoResponse {
    Json(ServiceInfo {
        ok: true,
        name: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: state.service.repo().backend().to_string(),
    })
}

/// Health check endpoint, probing the storage backend.
pub async fn health<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> impl IntoResponse {
    let storage = match state.service.repo().ping().await {
        Ok(()) => "healthy".to_string(),
        Err(e) => {
            tracing::warn!("storage health check failed: {}", e);
            format!("error: {}", e)
        }
    };

    Json(HealthReport {
        api: "healthy".to_string(),
        storage,
    })
}

/// Register a payment dated today.
#[tracing::instrument(skip(state), fields(holder_id = %req.holder_id, amount = req.amount))]
pub async fn create_payment<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    PaymentJson(req): PaymentJson<CreatePaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state.service.create_payment(req).await?;
    Ok(Json(payment))
}

/// List every registered payment.
#[tracing::instrument(skip(state))]
pub async fn list_payments<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let payments = state.service.list_payments().await?;
    tracing::debug!(count = payments.len(), "listing payments");
    Ok(Json(payments))
}
