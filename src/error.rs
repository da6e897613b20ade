use crate::models::ErrorResponse;
use crate::services::{DirectoryError, LedgerError, StorageError};
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Closed set of failure kinds surfaced over the API boundary
///
/// Every handler failure maps onto exactly one of these; status codes are
/// fixed per kind. All failures are per-request, none is fatal to the
/// process, and nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    /// Unknown username and wrong password are deliberately
    /// indistinguishable in this message.
    #[error("Incorrect username/password")]
    AuthenticationFailed,

    #[error("{0}")]
    NotFound(String),

    #[error("Username or email already exist")]
    DuplicateIdentity,

    #[error("profile image upload failed: {0}")]
    UploadFailed(#[from] StorageError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_failed",
            ApiError::AuthenticationFailed => "authentication_failed",
            ApiError::NotFound(_) => "not_found",
            ApiError::DuplicateIdentity => "duplicate_identity",
            ApiError::UploadFailed(_) => "upload_failed",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Duplicate => ApiError::DuplicateIdentity,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::UnknownUser(names) => {
                ApiError::NotFound(format!("No such user: {}", names))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DuplicateIdentity => StatusCode::CONFLICT,
            ApiError::UploadFailed(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}
