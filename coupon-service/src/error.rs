use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use coupon_shared::error::ServiceError;
use thiserror::Error;

use crate::models::ApiResponse;
use crate::validation::ValidationFailure;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<ValidationFailure> for AppError {
    fn from(failure: ValidationFailure) -> Self {
        tracing::debug!("Validation failed on field '{}'", failure.field);
        AppError::Service(ServiceError::Validation(failure.message))
    }
}

impl AppError {
    pub fn route_not_found() -> Self {
        AppError::NotFound("The requested resource was not found".into())
    }

    /// HTTP status on the wire and the status reported inside the envelope.
    ///
    /// A missing coupon on get or delete is answered with 400 like every other
    /// client error, while the envelope names it 404. Update reports its missing
    /// target as a `BadRequest`, so both statuses are 400 there.
    fn statuses(&self) -> (StatusCode, StatusCode) {
        match self {
            AppError::Service(ServiceError::NotFound(_)) => {
                (StatusCode::BAD_REQUEST, StatusCode::NOT_FOUND)
            }
            AppError::Service(ServiceError::Validation(_))
            | AppError::Service(ServiceError::Conflict(_))
            | AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, StatusCode::BAD_REQUEST),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, StatusCode::NOT_FOUND),
            AppError::Service(ServiceError::InternalError(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, envelope_status) = self.statuses();

        let message = match &self {
            AppError::Service(ServiceError::InternalError(msg)) => {
                tracing::error!("Internal server error: {}", msg);
                "Internal server error".to_string()
            }
            AppError::Service(err) => {
                tracing::warn!("Request rejected: {}", err);
                err.to_string()
            }
            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request error: {}", msg);
                msg.clone()
            }
            AppError::NotFound(msg) => {
                tracing::warn!("Not found error: {}", msg);
                msg.clone()
            }
        };

        tracing::info!(
            "Returning error response: status={}, message={}",
            status,
            message
        );
        (status, Json(ApiResponse::failure(envelope_status, message))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
