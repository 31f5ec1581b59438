use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::discount::DiscountPolicy;
use crate::domain::target::DiscountTarget;
use crate::domain::user::User;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CouponId(pub Uuid);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponStatus {
    Active,
    Inactive,
    Expired,
}

/// A code-redeemable discount offer. Read-only during evaluation: instances
/// are built from persisted definitions at lookup time and discarded when the
/// request completes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: CouponId,
    /// Unique redemption code, the lookup key at the request boundary.
    pub code: String,
    /// Display name, reported when the coupon is applied.
    pub name: String,
    pub discount_policy: DiscountPolicy,
    pub valid_until: DateTime<Utc>,
    pub status: CouponStatus,
    pub target: DiscountTarget,
    /// Price floor below which the coupon cannot be redeemed, compared
    /// against the product's pre-discount base price.
    pub minimum_purchase_amount: Decimal,
}

impl Coupon {
    /// Eligibility is derived fresh on every call, never stored: status gate,
    /// then time gate (expiry is computed from `valid_until`, no persisted
    /// transition), then the target rule. Total and side-effect free.
    pub fn is_available(
        &self,
        user: Option<&User>,
        product_code: &str,
        now: DateTime<Utc>,
    ) -> bool {
        if self.status != CouponStatus::Active {
            return false;
        }
        if now > self.valid_until {
            return false;
        }
        self.target.matches(user, product_code)
    }
}
