use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use super::{next_id, CouponStore};
use crate::error::{Result, ServiceError};
use crate::models::{seed_coupons, Coupon, CouponUpdate, NewCoupon};

/// In-memory implementation of CouponStore.
///
/// Every read and mutation goes through a single lock, so the name check and ID
/// assignment in `add` and the lookup in `remove` cannot interleave with other
/// requests.
pub struct MemoryCouponStore {
    coupons: Arc<RwLock<Vec<Coupon>>>,
}

impl MemoryCouponStore {
    /// Creates a new empty in-memory coupon store
    pub fn new() -> Self {
        Self::with_data(Vec::new())
    }

    /// Creates a new in-memory coupon store with initial data
    pub fn with_data(initial_data: Vec<Coupon>) -> Self {
        Self {
            coupons: Arc::new(RwLock::new(initial_data)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Coupon>>> {
        self.coupons
            .read()
            .map_err(|_| ServiceError::InternalError("Failed to acquire read lock".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Coupon>>> {
        self.coupons
            .write()
            .map_err(|_| ServiceError::InternalError("Failed to acquire write lock".into()))
    }
}

// Case-insensitive name lookup shared by `find_by_name` and the check in `add`
fn find_named<'a>(coupons: &'a [Coupon], name: &str) -> Option<&'a Coupon> {
    coupons.iter().find(|c| c.has_name(name))
}

impl Default for MemoryCouponStore {
    fn default() -> Self {
        Self::with_data(seed_coupons(Utc::now()))
    }
}

#[async_trait]
impl CouponStore for MemoryCouponStore {
    async fn list(&self) -> Result<Vec<Coupon>> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Coupon> {
        self.read()?
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(ServiceError::coupon_not_found)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Coupon>> {
        Ok(find_named(&self.read()?, name).cloned())
    }

    async fn add(&self, new_coupon: NewCoupon) -> Result<Coupon> {
        let mut coupons = self.write()?;

        if find_named(&coupons, &new_coupon.name).is_some() {
            return Err(ServiceError::duplicate_name());
        }

        let coupon = Coupon::from_new(next_id(&coupons), new_coupon, Utc::now());
        coupons.push(coupon.clone());
        Ok(coupon)
    }

    async fn update(&self, update: CouponUpdate) -> Result<Coupon> {
        let mut coupons = self.write()?;

        let coupon = coupons
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(ServiceError::coupon_not_found)?;

        coupon.apply(update, Utc::now());
        Ok(coupon.clone())
    }

    async fn remove(&self, id: i32) -> Result<()> {
        let mut coupons = self.write()?;

        let index = coupons
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(ServiceError::coupon_not_found)?;

        coupons.remove(index);
        Ok(())
    }
}
