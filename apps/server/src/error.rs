use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use countryinfo_core::constants::{INTERNAL_SERVER_ERROR, REQUEST_TIMED_OUT, URL_NOT_FOUND};
use countryinfo_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Url not found, check request method")]
    UrlNotFound,
    #[error("Request timed out")]
    Timeout,
    // Detail goes to the log only
    #[error("{0}")]
    Internal(String),
}

/// Every error response is `{"error": "<message>"}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => {
                let status = StatusCode::from_u16(e.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, e.to_string())
            }
            ApiError::UrlNotFound => (StatusCode::NOT_FOUND, URL_NOT_FOUND.to_string()),
            ApiError::Timeout => (StatusCode::REQUEST_TIMEOUT, REQUEST_TIMED_OUT.to_string()),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_SERVER_ERROR.to_string(),
            ),
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, Json(ErrorBody { error: msg })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
