use std::fmt;

use validator::{Validate, ValidationErrors};

use coupon_shared::models::{CouponUpdate, NewCoupon};

use crate::models::{CreateCouponRequest, UpdateCouponRequest};

/// Rules are reported in this order; only the first violation is surfaced.
const FIELD_ORDER: [&str; 2] = ["name", "percent"];

/// The first rule an incoming payload broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub fn validate_create(input: CreateCouponRequest) -> Result<NewCoupon, ValidationFailure> {
    if let Err(errors) = input.validate() {
        return Err(first_failure(&errors, input.percent));
    }

    Ok(NewCoupon {
        name: input.name,
        percent: input.percent,
        is_active: input.is_active,
    })
}

pub fn validate_update(input: UpdateCouponRequest) -> Result<CouponUpdate, ValidationFailure> {
    if let Err(errors) = input.validate() {
        return Err(first_failure(&errors, input.percent));
    }

    Ok(CouponUpdate {
        id: input.id,
        name: input.name,
        percent: input.percent,
        is_active: input.is_active,
    })
}

fn first_failure(errors: &ValidationErrors, percent: i32) -> ValidationFailure {
    let field_errors = errors.field_errors();

    for field in FIELD_ORDER {
        if let Some(error) = field_errors.get(field).and_then(|errs| errs.first()) {
            let message = match field {
                "percent" => format!(
                    "'Percent' must be between 1 and 100. You entered {}.",
                    percent
                ),
                _ => error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("'{}' is invalid.", field)),
            };
            return ValidationFailure { field, message };
        }
    }

    ValidationFailure {
        field: "payload",
        message: errors.to_string(),
    }
}
