use rust_decimal::Decimal;
use thiserror::Error;

use crate::lookup::LookupError;

/// Failures raised while constructing a discount policy, before any price
/// calculation runs.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("discount rate must be between 0 and 1, got {0}")]
    RateOutOfRange(Decimal),
    #[error("fixed discount amount must not be negative, got {0}")]
    NegativeAmount(Decimal),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("no product with code {code}")]
    ProductNotFound { code: String },
    #[error("product {code} is not currently sellable")]
    ProductInactive { code: String },
    #[error("none of the submitted coupon codes exist: {codes:?}")]
    CouponsNotFound { codes: Vec<String> },
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl PricingError {
    /// True for conditions a presentation boundary should map to a 404-class
    /// response rather than a generic failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProductNotFound { .. }
                | Self::ProductInactive { .. }
                | Self::CouponsNotFound { .. }
        )
    }
}
