use async_trait::async_trait;

use crate::error::{Result, ServiceError};
use crate::models::{Coupon, CouponUpdate, NewCoupon};
use crate::store::CouponStore;

/// A store whose every call fails, for exercising internal error paths.
pub struct FailingCouponStore {
    reason: String,
}

impl FailingCouponStore {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }

    fn fail<T>(&self) -> Result<T> {
        Err(ServiceError::InternalError(self.reason.clone()))
    }
}

#[async_trait]
impl CouponStore for FailingCouponStore {
    async fn list(&self) -> Result<Vec<Coupon>> {
        self.fail()
    }

    async fn find_by_id(&self, _id: i32) -> Result<Coupon> {
        self.fail()
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Coupon>> {
        self.fail()
    }

    async fn add(&self, _new_coupon: NewCoupon) -> Result<Coupon> {
        self.fail()
    }

    async fn update(&self, _update: CouponUpdate) -> Result<Coupon> {
        self.fail()
    }

    async fn remove(&self, _id: i32) -> Result<()> {
        self.fail()
    }
}
