use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::captcha::VerifyError;
use crate::db::DatabaseError;

/// Failures surfaced to HTTP callers.
///
/// The response bodies are deliberately not uniform: the listing route
/// reports storage failures as `{"error": ...}`, the mutating routes as
/// plain error text, and the captcha route always speaks
/// `{"success": ..., "message": ...}`. That asymmetry is part of the
/// endpoint contract.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    ListFailed(DatabaseError),

    #[error("{0}")]
    Storage(DatabaseError),

    #[error("Missing token or secret key")]
    MissingCaptchaInput,

    #[error("Error contacting Google for verification.")]
    CaptchaUnreachable(#[source] VerifyError),
}

#[derive(Serialize)]
struct StorageErrorBody {
    error: String,
}

#[derive(Serialize)]
struct CaptchaFailureBody {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ListFailed(e) => {
                error!(error = %e, "Listing investments failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(StorageErrorBody {
                        error: e.to_string(),
                    }),
                )
                    .into_response()
            }
            ApiError::Storage(e) => {
                error!(error = %e, "Storage operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
            ApiError::MissingCaptchaInput => (
                StatusCode::BAD_REQUEST,
                Json(CaptchaFailureBody {
                    success: false,
                    message: "Missing token or secret key".to_string(),
                }),
            )
                .into_response(),
            ApiError::CaptchaUnreachable(e) => {
                error!(error = %e, "Verification service unreachable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(CaptchaFailureBody {
                        success: false,
                        message: "Error contacting Google for verification.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
