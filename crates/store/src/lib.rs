//! In-memory read models backing the pricing core's lookup contracts.
//!
//! Snapshot-based: each lookup owns an immutable copy of its entities, so one
//! instance can serve many concurrent calculations without locks. These back
//! the integration tests and any embedding that does not need a database.

use chrono::{DateTime, Utc};

use tally_core::domain::coupon::{Coupon, CouponStatus};
use tally_core::domain::product::Product;
use tally_core::domain::promotion::Promotion;
use tally_core::domain::target::DiscountTarget;
use tally_core::domain::user::User;
use tally_core::lookup::{CouponLookup, LookupError, ProductLookup, PromotionLookup};

pub mod seed;

#[derive(Clone, Debug, Default)]
pub struct InMemoryProductLookup {
    products: Vec<Product>,
}

impl InMemoryProductLookup {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl ProductLookup for InMemoryProductLookup {
    fn get_by_code(&self, code: &str) -> Result<Option<Product>, LookupError> {
        Ok(self.products.iter().find(|product| product.code == code).cloned())
    }
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryCouponLookup {
    coupons: Vec<Coupon>,
}

impl InMemoryCouponLookup {
    pub fn new(coupons: Vec<Coupon>) -> Self {
        Self { coupons }
    }
}

impl CouponLookup for InMemoryCouponLookup {
    fn list_applicable(
        &self,
        product_code: &str,
        user: Option<&User>,
        now: DateTime<Utc>,
    ) -> Result<Vec<Coupon>, LookupError> {
        // Contract-side pre-filter: active, unexpired, target could match.
        // Minimum purchase and the full availability gate stay with the core.
        Ok(self
            .coupons
            .iter()
            .filter(|coupon| {
                coupon.status == CouponStatus::Active
                    && now <= coupon.valid_until
                    && coupon.target.matches(user, product_code)
            })
            .cloned()
            .collect())
    }

    fn get_by_codes(&self, codes: &[String]) -> Result<Vec<Coupon>, LookupError> {
        // Store iteration order, deliberately not the submitted order.
        Ok(self
            .coupons
            .iter()
            .filter(|coupon| codes.iter().any(|code| *code == coupon.code))
            .cloned()
            .collect())
    }
}

/// Store-side promotion row. Targeting lives on the persistence model, not
/// the domain entity, because the lookup contract promises pre-filtered
/// candidates.
#[derive(Clone, Debug, PartialEq)]
pub struct PromotionRecord {
    pub promotion: Promotion,
    pub target: DiscountTarget,
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryPromotionLookup {
    records: Vec<PromotionRecord>,
}

impl InMemoryPromotionLookup {
    pub fn new(records: Vec<PromotionRecord>) -> Self {
        Self { records }
    }
}

impl PromotionLookup for InMemoryPromotionLookup {
    fn active_promotions(
        &self,
        product_code: &str,
        user: Option<&User>,
    ) -> Result<Vec<Promotion>, LookupError> {
        let mut candidates: Vec<Promotion> = self
            .records
            .iter()
            .filter(|record| {
                record.promotion.is_auto_discount && record.target.matches(user, product_code)
            })
            .map(|record| record.promotion.clone())
            .collect();
        candidates.sort_by_key(|promotion| promotion.apply_priority);
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use tally_core::discount::DiscountPolicy;
    use tally_core::domain::coupon::{Coupon, CouponId, CouponStatus};
    use tally_core::domain::promotion::{Promotion, PromotionId};
    use tally_core::domain::target::DiscountTarget;
    use tally_core::lookup::{CouponLookup, PromotionLookup};

    use super::{InMemoryCouponLookup, InMemoryPromotionLookup, PromotionRecord};

    fn coupon(code: &str, status: CouponStatus, target: DiscountTarget) -> Coupon {
        Coupon {
            id: CouponId(Uuid::new_v4()),
            code: code.to_string(),
            name: format!("coupon {code}"),
            discount_policy: DiscountPolicy::percentage(Decimal::new(10, 2))
                .expect("valid rate"),
            valid_until: Utc::now() + Duration::days(30),
            status,
            target,
            minimum_purchase_amount: Decimal::ZERO,
        }
    }

    fn promotion(name: &str, is_auto_discount: bool, apply_priority: i32) -> Promotion {
        Promotion {
            id: PromotionId(Uuid::new_v4()),
            name: name.to_string(),
            discount_policy: DiscountPolicy::percentage(Decimal::new(5, 2))
                .expect("valid rate"),
            is_auto_discount,
            apply_priority,
        }
    }

    #[test]
    fn applicable_coupons_exclude_inactive_expired_and_mistargeted() {
        let mut expired = coupon("EXP", CouponStatus::Active, DiscountTarget::All);
        expired.valid_until = Utc::now() - Duration::days(1);

        let lookup = InMemoryCouponLookup::new(vec![
            coupon("ALL", CouponStatus::Active, DiscountTarget::All),
            coupon("OFF", CouponStatus::Inactive, DiscountTarget::All),
            expired,
            coupon(
                "OTHER",
                CouponStatus::Active,
                DiscountTarget::Product { product_code: "BOOK9".to_string() },
            ),
        ]);

        let applicable =
            lookup.list_applicable("BOOK1", None, Utc::now()).expect("lookup succeeds");
        let codes: Vec<&str> = applicable.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["ALL"]);
    }

    #[test]
    fn bulk_code_lookup_follows_store_order() {
        let lookup = InMemoryCouponLookup::new(vec![
            coupon("A", CouponStatus::Active, DiscountTarget::All),
            coupon("B", CouponStatus::Active, DiscountTarget::All),
        ]);

        let fetched = lookup
            .get_by_codes(&["B".to_string(), "A".to_string()])
            .expect("lookup succeeds");
        let codes: Vec<&str> = fetched.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B"]);
    }

    #[test]
    fn promotions_are_filtered_and_sorted_by_priority() {
        let lookup = InMemoryPromotionLookup::new(vec![
            PromotionRecord {
                promotion: promotion("SITEWIDE", true, 2),
                target: DiscountTarget::All,
            },
            PromotionRecord {
                promotion: promotion("BOOK1_ONLY", true, 1),
                target: DiscountTarget::Product { product_code: "BOOK1".to_string() },
            },
            PromotionRecord {
                promotion: promotion("MANUAL", false, 0),
                target: DiscountTarget::All,
            },
        ]);

        let candidates = lookup.active_promotions("BOOK1", None).expect("lookup succeeds");
        let names: Vec<&str> = candidates.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["BOOK1_ONLY", "SITEWIDE"]);

        let elsewhere = lookup.active_promotions("BOOK2", None).expect("lookup succeeds");
        let names: Vec<&str> = elsewhere.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["SITEWIDE"]);
    }
}
