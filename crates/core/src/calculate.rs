//! Price calculation use case.
//!
//! A linear pipeline with no branching back: fetch the product, validate,
//! collect the available coupons, apply the automatic promotion, then stack
//! the submitted coupon codes in order over the running price.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::coupons::{available_coupons, resolve_submitted};
use crate::discount::PriceResult;
use crate::domain::coupon::Coupon;
use crate::domain::product::Product;
use crate::domain::user::User;
use crate::errors::PricingError;
use crate::lookup::{CouponLookup, ProductLookup, PromotionLookup};
use crate::promotions::apply_promotion;

/// Result aggregate handed to the presentation boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    /// Coupons redeemable for this product/user, returned for display even
    /// when nothing was submitted.
    pub available_coupons: Vec<Coupon>,
    /// One entry per applied coupon occurrence (repeats included), with the
    /// promotion name last when one fired.
    pub applied_policies: Vec<String>,
    pub price: PriceResult,
}

/// Orchestrates one price calculation over injected lookup collaborators.
///
/// Holds no per-request state: each execution works on its own snapshot of
/// product, coupon, and promotion data, so one instance can serve many
/// concurrent calculations.
pub struct CalculatePriceUseCase {
    products: Arc<dyn ProductLookup>,
    coupons: Arc<dyn CouponLookup>,
    promotions: Arc<dyn PromotionLookup>,
}

impl CalculatePriceUseCase {
    pub fn new(
        products: Arc<dyn ProductLookup>,
        coupons: Arc<dyn CouponLookup>,
        promotions: Arc<dyn PromotionLookup>,
    ) -> Self {
        Self { products, coupons, promotions }
    }

    /// Resolves a product by catalog code.
    pub fn fetch(&self, code: &str) -> Result<Product, PricingError> {
        self.products
            .get_by_code(code)?
            .ok_or_else(|| PricingError::ProductNotFound { code: code.to_string() })
    }

    /// Request pre-checks: the product must be sellable, and when coupon
    /// codes were submitted at least one must exist. Existence here is a
    /// cheap gate, distinct from the eligibility filtering done during
    /// execution.
    pub fn validate(&self, product: &Product, coupon_codes: &[String]) -> Result<(), PricingError> {
        if !product.is_sellable() {
            return Err(PricingError::ProductInactive { code: product.code.clone() });
        }
        if coupon_codes.is_empty() {
            return Ok(());
        }

        let resolved = self.coupons.get_by_codes(coupon_codes)?;
        if resolved.is_empty() {
            return Err(PricingError::CouponsNotFound { codes: coupon_codes.to_vec() });
        }
        Ok(())
    }

    /// Computes the final price for `product`, stacking the submitted coupon
    /// codes in caller order on top of at most one automatic promotion.
    pub fn execute(
        &self,
        product: &Product,
        user: Option<&User>,
        coupon_codes: &[String],
    ) -> Result<Quotation, PricingError> {
        // One instant per calculation; every eligibility check sees it.
        let now = Utc::now();
        let base_price = product.price;

        let available =
            available_coupons(self.coupons.as_ref(), &product.code, user, base_price, now)?;
        let promotion =
            apply_promotion(self.promotions.as_ref(), &product.code, user, base_price)?;

        if coupon_codes.is_empty() && promotion.promotion_name.is_none() {
            return Ok(Quotation {
                available_coupons: available,
                applied_policies: Vec::new(),
                price: promotion.price,
            });
        }

        let allowed: HashSet<&str> = available.iter().map(|coupon| coupon.code.as_str()).collect();
        let mut price = promotion.price;
        let mut applied_policies = Vec::new();

        for coupon in resolve_submitted(self.coupons.as_ref(), coupon_codes)? {
            if !allowed.contains(coupon.code.as_str()) {
                debug!(code = %coupon.code, "submitted coupon is not available for this product/user");
                continue;
            }
            // Re-checked even though the allow-list passed: a coupon resolved
            // by code must clear the same gate as the display list.
            if !coupon.is_available(user, &product.code, now) {
                debug!(code = %coupon.code, "submitted coupon failed eligibility");
                continue;
            }

            price = price.chain(&coupon.discount_policy);
            applied_policies.push(coupon.name.clone());
        }

        // Report order: coupon names first, promotion name last, even though
        // the promotion discount was applied first numerically.
        if let Some(name) = promotion.promotion_name {
            applied_policies.push(name);
        }

        info!(
            product = %product.code,
            original = %price.original,
            discounted = %price.discounted,
            applied = applied_policies.len(),
            "price calculated"
        );

        Ok(Quotation {
            available_coupons: available,
            applied_policies,
            price: price.dedup_kinds(),
        })
    }
}
