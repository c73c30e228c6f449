pub mod coupon_handlers;

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiResponse;

// Turns a panicking handler into a 500 envelope without leaking the panic message
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
        )),
    )
        .into_response()
}
