use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Coupon, CouponUpdate, NewCoupon};

// In-memory store implementation
pub mod memory;

/// CouponStore trait defining the interface for coupon storage implementations
#[async_trait]
pub trait CouponStore: Send + Sync + 'static {
    /// Lists every coupon in insertion order
    async fn list(&self) -> Result<Vec<Coupon>>;

    /// Gets a coupon by ID
    async fn find_by_id(&self, id: i32) -> Result<Coupon>;

    /// Finds a coupon whose name matches case-insensitively.
    ///
    /// `add` performs the same check under its own lock, so the create path
    /// does not need to call this first.
    async fn find_by_name(&self, name: &str) -> Result<Option<Coupon>>;

    /// Adds a coupon, assigning its ID and creation time.
    ///
    /// Fails with a conflict when another coupon already carries the name.
    async fn add(&self, new_coupon: NewCoupon) -> Result<Coupon>;

    /// Overwrites name, percent and active flag of an existing coupon
    async fn update(&self, update: CouponUpdate) -> Result<Coupon>;

    /// Removes a coupon by ID
    async fn remove(&self, id: i32) -> Result<()>;
}

/// Next ID to hand out: one past the highest in use, or 1 for an empty store.
pub fn next_id(coupons: &[Coupon]) -> i32 {
    coupons.iter().map(|c| c.id).max().map_or(1, |max| max + 1)
}
