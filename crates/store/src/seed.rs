//! Deterministic demo catalog.
//!
//! Two books, the coupon archetypes the engine has to handle (sitewide,
//! product-scoped, user-scoped, minimum-purchase, expired, inactive), and two
//! auto promotions. Integration tests and demos build their lookups from this.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use tally_core::discount::DiscountPolicy;
use tally_core::domain::coupon::{Coupon, CouponId, CouponStatus};
use tally_core::domain::product::{Product, ProductId, ProductStatus};
use tally_core::domain::promotion::{Promotion, PromotionId};
use tally_core::domain::target::DiscountTarget;
use tally_core::domain::user::UserId;
use tally_core::errors::DomainError;

use crate::PromotionRecord;

#[derive(Clone, Debug)]
pub struct SeedCatalog {
    pub products: Vec<Product>,
    pub coupons: Vec<Coupon>,
    pub promotions: Vec<PromotionRecord>,
}

fn price(major: i64) -> Decimal {
    Decimal::new(major * 100, 2)
}

fn coupon(
    code: &str,
    name: &str,
    discount_policy: DiscountPolicy,
    valid_until: DateTime<Utc>,
    status: CouponStatus,
    target: DiscountTarget,
    minimum_purchase_amount: Decimal,
) -> Coupon {
    Coupon {
        id: CouponId(Uuid::new_v4()),
        code: code.to_string(),
        name: name.to_string(),
        discount_policy,
        valid_until,
        status,
        target,
        minimum_purchase_amount,
    }
}

/// Builds the catalog relative to `now`: live coupons expire in 30 days, the
/// expired one lapsed yesterday.
pub fn seed_catalog(now: DateTime<Utc>) -> Result<SeedCatalog, DomainError> {
    let future = now + Duration::days(30);
    let lapsed = now - Duration::days(1);

    let ten_pct = DiscountPolicy::percentage(Decimal::new(10, 2))?;
    let twenty_pct = DiscountPolicy::percentage(Decimal::new(20, 2))?;
    let five_pct = DiscountPolicy::percentage(Decimal::new(5, 2))?;
    let minus_5k = DiscountPolicy::fixed(price(5_000))?;
    let minus_1k = DiscountPolicy::fixed(price(1_000))?;

    let products = vec![
        Product {
            id: ProductId(Uuid::new_v4()),
            code: "BOOK1".to_string(),
            name: "도서 1".to_string(),
            price: price(5_000),
            status: ProductStatus::Active,
        },
        Product {
            id: ProductId(Uuid::new_v4()),
            code: "BOOK2".to_string(),
            name: "도서 2".to_string(),
            price: price(22_000),
            status: ProductStatus::Active,
        },
    ];

    let coupons = vec![
        coupon(
            "ALL10",
            "전체 10% 할인",
            ten_pct.clone(),
            future,
            CouponStatus::Active,
            DiscountTarget::All,
            price(15_000),
        ),
        coupon(
            "B2FIX5K",
            "도서2 전용 5,000원 할인",
            minus_5k,
            future,
            CouponStatus::Active,
            DiscountTarget::Product { product_code: "BOOK2".to_string() },
            Decimal::ZERO,
        ),
        coupon(
            "U20",
            "사용자 ABC 전용 20% 할인",
            twenty_pct,
            future,
            CouponStatus::Active,
            DiscountTarget::User { user_id: UserId("ABC".to_string()) },
            Decimal::ZERO,
        ),
        coupon(
            "MIN5K1K",
            "최소 5,000원 1,000원 할인",
            minus_1k,
            future,
            CouponStatus::Active,
            DiscountTarget::All,
            price(5_000),
        ),
        coupon(
            "EXP10",
            "만료 10% 할인",
            ten_pct.clone(),
            lapsed,
            CouponStatus::Active,
            DiscountTarget::All,
            Decimal::ZERO,
        ),
        coupon(
            "INACT10",
            "비활성 10% 할인",
            ten_pct.clone(),
            future,
            CouponStatus::Inactive,
            DiscountTarget::All,
            Decimal::ZERO,
        ),
    ];

    let promotions = vec![
        PromotionRecord {
            promotion: Promotion {
                id: PromotionId(Uuid::new_v4()),
                name: "BOOK2_10PERCENT_PROMO".to_string(),
                discount_policy: ten_pct,
                is_auto_discount: true,
                apply_priority: 1,
            },
            target: DiscountTarget::Product { product_code: "BOOK2".to_string() },
        },
        PromotionRecord {
            promotion: Promotion {
                id: PromotionId(Uuid::new_v4()),
                name: "SITEWIDE_5PERCENT_PROMO".to_string(),
                discount_policy: five_pct,
                is_auto_discount: true,
                apply_priority: 2,
            },
            target: DiscountTarget::All,
        },
    ];

    Ok(SeedCatalog { products, coupons, promotions })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::seed_catalog;

    #[test]
    fn seed_codes_are_unique() {
        let catalog = seed_catalog(Utc::now()).expect("seed builds");

        let mut coupon_codes: Vec<&str> =
            catalog.coupons.iter().map(|c| c.code.as_str()).collect();
        coupon_codes.sort_unstable();
        coupon_codes.dedup();
        assert_eq!(coupon_codes.len(), catalog.coupons.len());

        let mut product_codes: Vec<&str> =
            catalog.products.iter().map(|p| p.code.as_str()).collect();
        product_codes.sort_unstable();
        product_codes.dedup();
        assert_eq!(product_codes.len(), catalog.products.len());
    }
}
