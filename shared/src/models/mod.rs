use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discount record as held by the store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: i32,
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
    pub created: DateTime<Utc>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// A validated coupon waiting for the store to assign its id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCoupon {
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
}

/// Validated replacement values for an existing coupon.
///
/// Only `name`, `percent` and `is_active` are written; `id` selects the record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CouponUpdate {
    pub id: i32,
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
}

impl Coupon {
    pub fn from_new(id: i32, new_coupon: NewCoupon, created: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new_coupon.name,
            percent: new_coupon.percent,
            is_active: new_coupon.is_active,
            created,
            last_updated: None,
        }
    }

    /// Overwrites the mutable fields and stamps `last_updated`.
    pub fn apply(&mut self, update: CouponUpdate, now: DateTime<Utc>) {
        self.name = update.name;
        self.percent = update.percent;
        self.is_active = update.is_active;
        self.last_updated = Some(now);
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

// Records the service starts with
pub fn seed_coupons(created: DateTime<Utc>) -> Vec<Coupon> {
    vec![
        Coupon {
            id: 1,
            name: "100FF".into(),
            percent: 10,
            is_active: true,
            created,
            last_updated: None,
        },
        Coupon {
            id: 2,
            name: "200FF".into(),
            percent: 20,
            is_active: false,
            created,
            last_updated: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_id_and_created() {
        let created = Utc::now();
        let mut coupon = seed_coupons(created).remove(0);

        coupon.apply(
            CouponUpdate {
                id: 99,
                name: "SPRING".into(),
                percent: 35,
                is_active: false,
            },
            Utc::now(),
        );

        assert_eq!(coupon.id, 1);
        assert_eq!(coupon.created, created);
        assert_eq!(coupon.name, "SPRING");
        assert_eq!(coupon.percent, 35);
        assert!(!coupon.is_active);
        assert!(coupon.last_updated.is_some());
    }

    #[test]
    fn test_has_name_ignores_case() {
        let coupon = seed_coupons(Utc::now()).remove(0);
        assert!(coupon.has_name("100ff"));
        assert!(!coupon.has_name("100F"));
    }

    #[test]
    fn test_coupon_serializes_camel_case() {
        let coupon = seed_coupons(Utc::now()).remove(1);
        let value = serde_json::to_value(&coupon).unwrap();

        assert_eq!(value["id"], 2);
        assert_eq!(value["isActive"], false);
        assert!(value["lastUpdated"].is_null());
        assert!(value.get("created").is_some());
    }
}
