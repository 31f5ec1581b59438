//! Tally pricing core.
//!
//! Deterministic discount evaluation for a product catalog: given a product,
//! an optional user, and an ordered list of coupon codes, apply at most one
//! automatic promotion and then stack coupon discounts sequentially over the
//! running price. The output is auditable: final price, total discount, the
//! policy kinds involved, and the applied policy names in report order.
//!
//! Persistence and transport live behind the [`lookup`] traits; the core
//! itself is synchronous, stateless, and safe to run concurrently.

pub mod calculate;
pub mod coupons;
pub mod discount;
pub mod domain;
pub mod errors;
pub mod lookup;
pub mod promotions;

pub use calculate::{CalculatePriceUseCase, Quotation};
pub use discount::{DiscountKind, DiscountPolicy, PriceResult};
pub use domain::coupon::{Coupon, CouponId, CouponStatus};
pub use domain::product::{Product, ProductId, ProductStatus};
pub use domain::promotion::{Promotion, PromotionId};
pub use domain::target::DiscountTarget;
pub use domain::user::{User, UserId};
pub use errors::{DomainError, PricingError};
pub use lookup::{CouponLookup, LookupError, ProductLookup, PromotionLookup};
