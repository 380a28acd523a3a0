use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

/// Internal failure causes, kept distinct for logging and tests.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// The two failure kinds visible over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Unprocessable,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "resource not found",
            ErrorKind::Unprocessable => "unprocessable",
        }
    }
}

/// Error returned by handlers.
///
/// Every endpoint maps all of its failures to a single [`ErrorKind`]; the
/// internal [`AppError`] is only logged, never sent to the client.
#[derive(Debug)]
pub struct ApiError {
    kind: ErrorKind,
    cause: Option<AppError>,
}

impl ApiError {
    pub fn new(kind: ErrorKind, cause: AppError) -> Self {
        Self {
            kind,
            cause: Some(cause),
        }
    }

    pub fn not_found(cause: AppError) -> Self {
        Self::new(ErrorKind::NotFound, cause)
    }

    pub fn unprocessable(cause: AppError) -> Self {
        Self::new(ErrorKind::Unprocessable, cause)
    }

    /// Bare error with no underlying cause (e.g. unmatched route)
    pub fn bare(kind: ErrorKind) -> Self {
        Self { kind, cause: None }
    }

    #[allow(dead_code)]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[allow(dead_code)]
    pub fn cause(&self) -> Option<&AppError> {
        self.cause.as_ref()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind.status();

        match self.cause {
            Some(AppError::StoreUnavailable(ref e)) => {
                tracing::error!(status = status.as_u16(), "Store error: {:?}", e);
            }
            Some(AppError::Validation(ref msg)) => {
                tracing::warn!(status = status.as_u16(), "Validation error: {}", msg);
            }
            Some(AppError::NotFound(ref msg)) => {
                tracing::debug!(status = status.as_u16(), "Not found: {}", msg);
            }
            None => {}
        }

        let body = Json(ErrorResponse::new(
            status.as_u16(),
            self.kind.message().to_string(),
        ));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Translate service results into the endpoint's HTTP error kind.
pub trait ResultExt<T> {
    fn or_not_found(self) -> ApiResult<T>;
    fn or_unprocessable(self) -> ApiResult<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn or_not_found(self) -> ApiResult<T> {
        self.map_err(ApiError::not_found)
    }

    fn or_unprocessable(self) -> ApiResult<T> {
        self.map_err(ApiError::unprocessable)
    }
}

/// Fallback for routes that match nothing
pub async fn route_not_found() -> ApiError {
    ApiError::bare(ErrorKind::NotFound)
}
