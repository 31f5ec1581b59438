//! Automatic promotion selection.

use rust_decimal::Decimal;
use tracing::debug;

use crate::discount::PriceResult;
use crate::domain::user::User;
use crate::errors::PricingError;
use crate::lookup::PromotionLookup;

/// Outcome of promotion selection: the seeded running price plus the name of
/// the applied promotion, if any fired.
#[derive(Clone, Debug, PartialEq)]
pub struct AppliedPromotion {
    pub price: PriceResult,
    pub promotion_name: Option<String>,
}

/// Applies the highest-priority eligible promotion to `base_price`.
///
/// The lookup returns candidates ordered by ascending `apply_priority`, so
/// the first entry wins; at most one promotion ever fires per calculation.
/// A code is assumed to never be both a promotion and a coupon.
pub fn apply_promotion(
    lookup: &dyn PromotionLookup,
    product_code: &str,
    user: Option<&User>,
    base_price: Decimal,
) -> Result<AppliedPromotion, PricingError> {
    let candidates = lookup.active_promotions(product_code, user)?;
    let Some(promotion) = candidates.first() else {
        return Ok(AppliedPromotion {
            price: PriceResult::unchanged(base_price),
            promotion_name: None,
        });
    };

    debug!(
        promotion = %promotion.name,
        priority = promotion.apply_priority,
        "applying automatic promotion"
    );

    Ok(AppliedPromotion {
        price: promotion.discount_policy.apply(base_price),
        promotion_name: Some(promotion.name.clone()),
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use super::apply_promotion;
    use crate::discount::{DiscountKind, DiscountPolicy};
    use crate::domain::promotion::{Promotion, PromotionId};
    use crate::domain::user::User;
    use crate::lookup::{LookupError, PromotionLookup};

    struct StubPromotions(Vec<Promotion>);

    impl PromotionLookup for StubPromotions {
        fn active_promotions(
            &self,
            _product_code: &str,
            _user: Option<&User>,
        ) -> Result<Vec<Promotion>, LookupError> {
            Ok(self.0.clone())
        }
    }

    fn promotion(name: &str, rate_bp: i64, apply_priority: i32) -> Promotion {
        Promotion {
            id: PromotionId(Uuid::new_v4()),
            name: name.to_string(),
            discount_policy: DiscountPolicy::percentage(Decimal::new(rate_bp, 2))
                .expect("valid rate"),
            is_auto_discount: true,
            apply_priority,
        }
    }

    #[test]
    fn no_candidates_leaves_the_price_unchanged() {
        let lookup = StubPromotions(Vec::new());
        let applied = apply_promotion(&lookup, "BOOK2", None, Decimal::new(2_200_000, 2))
            .expect("selection succeeds");

        assert_eq!(applied.promotion_name, None);
        assert_eq!(applied.price.discounted, Decimal::new(2_200_000, 2));
        assert_eq!(applied.price.discount_amount, Decimal::ZERO);
        assert!(applied.price.discount_types.is_empty());
    }

    #[test]
    fn first_candidate_wins() {
        let lookup = StubPromotions(vec![
            promotion("BOOK2_10PERCENT_PROMO", 10, 1),
            promotion("SITEWIDE_5PERCENT_PROMO", 5, 2),
        ]);
        let applied = apply_promotion(&lookup, "BOOK2", None, Decimal::new(2_200_000, 2))
            .expect("selection succeeds");

        assert_eq!(applied.promotion_name.as_deref(), Some("BOOK2_10PERCENT_PROMO"));
        assert_eq!(applied.price.discounted, Decimal::new(1_980_000, 2));
        assert_eq!(applied.price.discount_types, vec![DiscountKind::Percentage]);
    }
}
