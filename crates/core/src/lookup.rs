//! Read-model collaborator contracts.
//!
//! Persistence sits behind these traits; the core only ever sees immutable
//! entity snapshots fetched fresh for one calculation. Implementations must
//! be safe for concurrent reads. Backend failures propagate unmodified as
//! [`LookupError`]; the core never catches and reinterprets them.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::coupon::Coupon;
use crate::domain::product::Product;
use crate::domain::promotion::Promotion;
use crate::domain::user::User;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("lookup backend failure: {0}")]
    Backend(String),
}

pub trait ProductLookup: Send + Sync {
    fn get_by_code(&self, code: &str) -> Result<Option<Product>, LookupError>;
}

pub trait CouponLookup: Send + Sync {
    /// Candidate coupons for this product/user: active and not expired at
    /// `now`, targets that could match. The caller still runs the
    /// minimum-purchase and `is_available` filters.
    fn list_applicable(
        &self,
        product_code: &str,
        user: Option<&User>,
        now: DateTime<Utc>,
    ) -> Result<Vec<Coupon>, LookupError>;

    /// Coupons whose code appears in `codes`. Result order follows the
    /// backing store, not the input; callers that need the submitted order
    /// must re-derive it.
    fn get_by_codes(&self, codes: &[String]) -> Result<Vec<Coupon>, LookupError>;
}

pub trait PromotionLookup: Send + Sync {
    /// Auto-discount promotions whose target covers this product/user,
    /// ordered by ascending `apply_priority`.
    fn active_promotions(
        &self,
        product_code: &str,
        user: Option<&User>,
    ) -> Result<Vec<Promotion>, LookupError>;
}
