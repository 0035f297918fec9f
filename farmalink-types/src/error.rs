//! Error types for the payments service.

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Transaction error: {0}")]
    Transaction(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required field is absent or has the wrong shape.
    #[error("Malformed input: {message}")]
    MalformedInput {
        message: String,
        field: Option<String>,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The body was refused before parsing (too large, wrong media type).
    /// `status` is the HTTP status the transport layer chose.
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn malformed(message: impl Into<String>, field: Option<String>) -> Self {
        AppError::MalformedInput {
            message: message.into(),
            field,
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_error_maps_to_internal() {
        let err: AppError = RepoError::Transaction("commit failed".into()).into();

        match err {
            AppError::Internal(msg) => assert!(msg.contains("commit failed")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
