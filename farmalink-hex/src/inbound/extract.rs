//! JSON body extractor with field-level rejections.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use farmalink_types::AppError;

use super::handlers::ApiError;

const NOT_AN_OBJECT: &str =
    "Failed to deserialize the JSON body into the target type: expected a JSON object";

/// Drop-in replacement for `axum::Json` that turns body rejections into
/// `ApiError`s carrying the offending field, when serde names one.
///
/// Only JSON objects are accepted; arrays and scalars are shape errors even
/// when serde could read them positionally. Shape errors (missing field,
/// wrong type, not an object) become `MalformedInput` (422). Unparseable
/// bodies become `BadRequest` (400). Other body rejections keep axum's
/// status, e.g. 413 for an oversized body or 415 for a missing
/// `Content-Type: application/json`.
pub struct PaymentJson<T>(pub T);

impl<S, T> FromRequest<S> for PaymentJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(reject)?;

        if !value.is_object() {
            tracing::debug!("rejected request body: not a JSON object");
            return Err(ApiError(AppError::malformed(NOT_AN_OBJECT, None)));
        }

        // Re-read through axum so data errors keep their field path.
        let bytes = serde_json::to_vec(&value)
            .map_err(|e| ApiError(AppError::Internal(e.to_string())))?;
        let Json(payload) = Json::<T>::from_bytes(&bytes).map_err(reject)?;

        Ok(Self(payload))
    }
}

fn reject(rejection: JsonRejection) -> ApiError {
    tracing::debug!("rejected request body: {}", rejection.body_text());
    ApiError(rejection_to_error(rejection))
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let message = err.body_text();
            let field = offending_field(&message);
            AppError::MalformedInput { message, field }
        }
        other if other.status() == StatusCode::BAD_REQUEST => {
            AppError::BadRequest(other.body_text())
        }
        other => AppError::Rejected {
            status: other.status().as_u16(),
            message: other.body_text(),
        },
    }
}

/// Pulls the field name out of a deserialization message.
///
/// Handles serde's ``missing field `name` `` and the `path: reason` prefix
/// axum adds for errors below the document root.
fn offending_field(message: &str) -> Option<String> {
    if let Some(rest) = message.split("missing field `").nth(1) {
        return rest.split('`').next().map(str::to_owned);
    }

    let detail = message
        .rsplit_once("target type: ")
        .map_or(message, |(_, detail)| detail);
    let (path, _) = detail.split_once(": ")?;

    (!path.is_empty() && !path.contains(' ')).then(|| path.to_owned())
}
