//! Error-to-status mapping for the REST boundary.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{debug, error};

use crate::directory::{
    domain::UserDomainError, ports::UserRepositoryError, services::DirectoryError,
};
use crate::ledger::{
    domain::LedgerDomainError, ports::TaskRepositoryError, services::LedgerError,
};

/// Transport-level error carrying the status to answer with.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

/// JSON body rendered for error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Creates an error response with an explicit status.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Returns the response status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Maps a directory error onto the response status.
const fn directory_status(err: &DirectoryError) -> StatusCode {
    match err {
        DirectoryError::Domain(UserDomainError::InvalidPassport(_)) => StatusCode::BAD_REQUEST,
        DirectoryError::Enrichment(_) => StatusCode::BAD_GATEWAY,
        DirectoryError::Repository(UserRepositoryError::NotFound(_)) => StatusCode::NOT_FOUND,
        DirectoryError::Repository(
            UserRepositoryError::DuplicatePassport(_) | UserRepositoryError::DuplicateUser(_),
        ) => StatusCode::CONFLICT,
        DirectoryError::Repository(UserRepositoryError::Persistence(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Maps a ledger error onto the response status.
const fn ledger_status(err: &LedgerError) -> StatusCode {
    match err {
        LedgerError::Domain(LedgerDomainError::InvalidDate(_)) => StatusCode::BAD_REQUEST,
        LedgerError::Domain(LedgerDomainError::TaskAlreadyClosed(_))
        | LedgerError::OpenTaskConflict(_) => StatusCode::CONFLICT,
        LedgerError::Repository(TaskRepositoryError::NotFound(_)) => StatusCode::NOT_FOUND,
        LedgerError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        let status = directory_status(&err);
        if status.is_server_error() {
            error!("directory operation failed: {err}");
        } else {
            debug!("directory request rejected: {err}");
        }
        Self::new(status, err.to_string())
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        let status = ledger_status(&err);
        if status.is_server_error() {
            error!("ledger operation failed: {err}");
        } else {
            debug!("ledger request rejected: {err}");
        }
        Self::new(status, err.to_string())
    }
}
