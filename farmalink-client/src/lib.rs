//! # FarmaLink Client SDK
//!
//! A typed Rust client for the FarmaLink payments API.

use farmalink_types::{CreatePaymentRequest, HealthReport, Payment, ServiceInfo};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// FarmaLink payments API client.
pub struct FarmaLinkClient {
    base_url: String,
    http: Client,
}

impl FarmaLinkClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Fetches the API and storage health report.
    pub async fn health_report(&self) -> Result<HealthReport, ClientError> {
        self.get("/health").await
    }

    /// Fetches the service banner.
    pub async fn info(&self) -> Result<ServiceInfo, ClientError> {
        self.get("/").await
    }

    /// Registers a payment. The server assigns the payment date.
    pub async fn create_payment(
        &self,
        holder_name: &str,
        holder_id: &str,
        amount: f64,
    ) -> Result<Payment, ClientError> {
        let req = CreatePaymentRequest::new(holder_name, holder_id, amount);
        self.post("/api/pagos/realizar", &req).await
    }

    /// Lists every registered payment, oldest first.
    pub async fn list_payments(&self) -> Result<Vec<Payment>, ClientError> {
        self.get("/api/pagos/").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

/// Extracts the `error` field from an API error body, falling back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FarmaLinkClient::new("http://localhost:8000");
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = FarmaLinkClient::new("http://localhost:8000/");
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_error_message_from_json_body() {
        let body = r#"{"error": "missing field `amount`", "code": 422, "field": "amount"}"#;
        assert_eq!(error_message(body), "missing field `amount`");
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }
}
