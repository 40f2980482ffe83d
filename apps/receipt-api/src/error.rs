//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Source                          ApiError           Response            │
//! │  ──────                          ────────           ────────            │
//! │  JsonRejection (bad body)  ──┐                                          │
//! │  ValidationError           ──┴─► InvalidReceipt  ─► 400 "The receipt…"  │
//! │  store.get() == None       ────► ReceiptNotFound ─► 404 "No receipt…"   │
//! │  StoreError                ────► Internal        ─► 500                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Clients only ever see a one-line `{"description": ...}`. The detailed
//! reason (which field failed, which lock poisoned) goes to the log.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_core::{ErrorResponse, ValidationError};
use tracing::{debug, error};

use crate::store::StoreError;

/// Errors returned from HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Any validation or deserialization failure on submission.
    #[error("The receipt is invalid.")]
    InvalidReceipt,

    /// Identifier was never issued by this process.
    #[error("No receipt found for that ID.")]
    ReceiptNotFound { id: String },

    /// Something broke on our side; the message is logged, not returned.
    #[error("Internal server error.")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidReceipt => StatusCode::BAD_REQUEST,
            ApiError::ReceiptNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(message) => error!(%message, "request failed"),
            ApiError::ReceiptNotFound { id } => debug!(receipt_id = %id, "receipt not found"),
            ApiError::InvalidReceipt => {}
        }

        let body = ErrorResponse {
            description: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        debug!(field = err.field(), reason = %err, "receipt rejected");
        ApiError::InvalidReceipt
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(reason = %rejection.body_text(), "receipt rejected: unreadable body");
        ApiError::InvalidReceipt
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidReceipt.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::ReceiptNotFound { id: "x".to_string() }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(ApiError::InvalidReceipt.to_string(), "The receipt is invalid.");
        assert_eq!(
            ApiError::ReceiptNotFound { id: "x".to_string() }.to_string(),
            "No receipt found for that ID."
        );
        // Internal details never leak into the description
        assert_eq!(
            ApiError::Internal("Receipt store lock poisoned".to_string()).to_string(),
            "Internal server error."
        );
    }

    #[test]
    fn test_conversions() {
        let err: ApiError = ValidationError::Required {
            field: "retailer".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::InvalidReceipt));

        let err: ApiError = StoreError::LockPoisoned.into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
