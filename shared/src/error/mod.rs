use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ServiceError {
    pub fn coupon_not_found() -> Self {
        ServiceError::NotFound("Coupon not found".into())
    }

    pub fn duplicate_name() -> Self {
        ServiceError::Conflict("Coupon Name already exists".into())
    }
}
