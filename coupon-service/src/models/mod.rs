use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use coupon_shared::models::Coupon;

// Request DTOs
//
// Missing fields fall back to their defaults so that they are reported by
// validation instead of failing to decode.
#[derive(Deserialize, Validate, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCouponRequest {
    #[validate(length(min = 1, message = "'Name' must not be empty."))]
    pub name: String,
    #[validate(range(min = 1, max = 100))]
    pub percent: i32,
    pub is_active: bool,
}

#[derive(Deserialize, Validate, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCouponRequest {
    pub id: i32,
    #[validate(length(min = 1, message = "'Name' must not be empty."))]
    pub name: String,
    #[validate(range(min = 1, max = 100))]
    pub percent: i32,
    pub is_active: bool,
}

// Response DTOs

/// Outward view of a coupon.
///
/// Currently mirrors every field of `Coupon`; fields that should not leave the
/// service get dropped here.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CouponResponse {
    pub id: i32,
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
    pub created: DateTime<Utc>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl From<Coupon> for CouponResponse {
    fn from(coupon: Coupon) -> Self {
        Self {
            id: coupon.id,
            name: coupon.name,
            percent: coupon.percent,
            is_active: coupon.is_active,
            created: coupon.created,
            last_updated: coupon.last_updated,
        }
    }
}

/// Uniform envelope wrapping every response body.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    pub status_code: u16,
    pub error_messages: Vec<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(status: StatusCode, result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            status_code: status.as_u16(),
            error_messages: Vec::new(),
        }
    }
}

impl ApiResponse<()> {
    /// Success without a payload; `result` serializes as null.
    pub fn empty(status: StatusCode) -> Self {
        Self {
            success: true,
            result: None,
            status_code: status.as_u16(),
            error_messages: Vec::new(),
        }
    }

    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            status_code: status.as_u16(),
            error_messages: vec![message.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_take_defaults() {
        let request: CreateCouponRequest = serde_json::from_value(json!({ "name": "X" })).unwrap();
        assert_eq!(request.name, "X");
        assert_eq!(request.percent, 0);
        assert!(!request.is_active);
    }

    #[test]
    fn test_envelope_shape() {
        let value = serde_json::to_value(ApiResponse::empty(StatusCode::OK)).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "result": null,
                "statusCode": 200,
                "errorMessages": []
            })
        );
    }
}
