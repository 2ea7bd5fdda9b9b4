//! Typed error handling for the billed services
//!
//! Every failure a service can report is one of the categories below, so the
//! REST layer can map it to an HTTP status and a stable error code, and an
//! embedding UI can surface the message unchanged.

use crate::core::receipt::ReceiptError;
use crate::core::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The main error type for bill operations.
#[derive(Debug)]
pub enum BilledError {
    /// Store call rejection; the message is surfaced to the user verbatim.
    Store(StoreError),

    /// Receipt file rejected at selection time.
    Receipt(ReceiptError),

    /// New-bill form rejected before any store call.
    Form(FormError),

    /// Internal errors (should not happen in normal operation).
    Internal(String),
}

/// Rejections of the new-bill form itself.
#[derive(Debug, Error)]
pub enum FormError {
    /// Submission attempted without a validated receipt attached.
    #[error("aucun justificatif n'est attaché à la note de frais")]
    MissingReceipt,

    /// Field-level validation failures.
    #[error("{0}")]
    Invalid(#[from] validator::ValidationErrors),
}

impl fmt::Display for BilledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BilledError::Store(e) => write!(f, "{}", e),
            BilledError::Receipt(e) => write!(f, "{}", e),
            BilledError::Form(e) => write!(f, "{}", e),
            BilledError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for BilledError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BilledError::Store(e) => Some(e),
            BilledError::Receipt(e) => Some(e),
            BilledError::Form(e) => Some(e),
            BilledError::Internal(_) => None,
        }
    }
}

/// Error body returned by the REST exposure.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl BilledError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            BilledError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            BilledError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BilledError::Receipt(_) => StatusCode::BAD_REQUEST,
            BilledError::Form(_) => StatusCode::BAD_REQUEST,
            BilledError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error code for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            BilledError::Store(StoreError::NotFound) => "STORE_NOT_FOUND",
            BilledError::Store(_) => "STORE_FAILURE",
            BilledError::Receipt(_) => "RECEIPT_REJECTED",
            BilledError::Form(FormError::MissingReceipt) => "MISSING_RECEIPT",
            BilledError::Form(FormError::Invalid(_)) => "FORM_INVALID",
            BilledError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to the REST error body.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for BilledError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<StoreError> for BilledError {
    fn from(err: StoreError) -> Self {
        BilledError::Store(err)
    }
}

impl From<ReceiptError> for BilledError {
    fn from(err: ReceiptError) -> Self {
        BilledError::Receipt(err)
    }
}

impl From<FormError> for BilledError {
    fn from(err: FormError) -> Self {
        BilledError::Form(err)
    }
}

impl From<validator::ValidationErrors> for BilledError {
    fn from(err: validator::ValidationErrors) -> Self {
        BilledError::Form(FormError::Invalid(err))
    }
}
