//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to register a payment.
///
/// The payment date is never taken from the client. A `payment_date` (or
/// `fecha_pago`) field in the body is ignored like any other unknown field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentRequest {
    /// Name of the person paid
    #[serde(alias = "nombre")]
    #[schema(example = "Ana Pérez")]
    pub holder_name: String,
    /// National identification string (RUT)
    #[serde(alias = "rut")]
    #[schema(example = "12345678-9")]
    pub holder_id: String,
    /// Amount to pay
    #[serde(alias = "monto_a_pagar")]
    #[schema(example = 50000.0)]
    pub amount: f64,
}

impl CreatePaymentRequest {
    pub fn new(holder_name: impl Into<String>, holder_id: impl Into<String>, amount: f64) -> Self {
        Self {
            holder_name: holder_name.into(),
            holder_id: holder_id.into(),
            amount,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Service DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Banner returned by the root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub ok: bool,
    #[schema(example = "FarmaLink API")]
    pub name: String,
    #[schema(example = "0.2.0")]
    pub version: String,
    /// Storage backend in use (`memory`, `sqlite` or `postgres`)
    #[schema(example = "memory")]
    pub storage: String,
}

/// Health report for the API and its storage backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    #[schema(example = "healthy")]
    pub api: String,
    /// `healthy`, or `error: <reason>` when the storage probe fails
    #[schema(example = "healthy")]
    pub storage: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_spanish_aliases() {
        let req: CreatePaymentRequest = serde_json::from_str(
            r#"{"nombre": "Ana Pérez", "rut": "12345678-9", "monto_a_pagar": 50000}"#,
        )
        .unwrap();

        assert_eq!(req.holder_name, "Ana Pérez");
        assert_eq!(req.holder_id, "12345678-9");
        assert_eq!(req.amount, 50000.0);
    }

    #[test]
    fn test_create_request_ignores_client_date() {
        let req: CreatePaymentRequest = serde_json::from_str(
            r#"{"holder_name": "Ana", "holder_id": "1-9", "amount": 1.5, "payment_date": "1999-01-01"}"#,
        )
        .unwrap();

        assert_eq!(req.amount, 1.5);
    }

    #[test]
    fn test_create_request_missing_field_fails() {
        let err = serde_json::from_str::<CreatePaymentRequest>(
            r#"{"holder_name": "Ana", "amount": 10}"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("missing field `holder_id`"));
    }
}
