//! Coupon availability filtering and submitted-code resolution.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::coupon::Coupon;
use crate::domain::user::User;
use crate::errors::PricingError;
use crate::lookup::CouponLookup;

/// Coupons redeemable for this product/user right now, in store order.
///
/// The minimum-purchase threshold is compared against the original base
/// price, never a running discounted price, so availability does not depend
/// on how discounts stack later.
pub fn available_coupons(
    lookup: &dyn CouponLookup,
    product_code: &str,
    user: Option<&User>,
    base_price: Decimal,
    now: DateTime<Utc>,
) -> Result<Vec<Coupon>, PricingError> {
    let candidates = lookup.list_applicable(product_code, user, now)?;

    let available = candidates
        .into_iter()
        .filter(|coupon| {
            if base_price < coupon.minimum_purchase_amount {
                debug!(code = %coupon.code, "coupon rejected: below minimum purchase amount");
                return false;
            }
            coupon.is_available(user, product_code, now)
        })
        .collect();

    Ok(available)
}

/// Resolves submitted codes to coupon entities, replaying the caller's order.
///
/// Backends make no ordering promise for bulk code lookups, so the result is
/// re-indexed by code and the submitted list replayed: position is preserved
/// and a code submitted twice resolves twice. Codes that resolve to nothing
/// are silently dropped here; existence is pre-checked during validation.
pub fn resolve_submitted(
    lookup: &dyn CouponLookup,
    codes: &[String],
) -> Result<Vec<Coupon>, PricingError> {
    if codes.is_empty() {
        return Ok(Vec::new());
    }

    let fetched = lookup.get_by_codes(codes)?;
    let by_code: HashMap<&str, &Coupon> =
        fetched.iter().map(|coupon| (coupon.code.as_str(), coupon)).collect();

    Ok(codes
        .iter()
        .filter_map(|code| by_code.get(code.as_str()).map(|&coupon| coupon.clone()))
        .collect())
}
