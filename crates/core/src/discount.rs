//! Discount policies and price results.
//!
//! A policy is a pure value object: applying one never mutates its input and
//! never produces a negative price. Stacking happens by chaining results, so
//! the running discounted price of one step becomes the input of the next.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Tag describing which family a discount belongs to, used for result
/// aggregation and API display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    Percentage,
    Fixed,
}

/// A price-transformation rule. Construct through [`DiscountPolicy::percentage`]
/// or [`DiscountPolicy::fixed`] so range checks run up front, before any
/// calculation sees the policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountPolicy {
    Percentage { rate: Decimal },
    Fixed { amount: Decimal },
}

impl DiscountPolicy {
    /// A proportional discount. `rate` must lie in `[0, 1]` inclusive.
    pub fn percentage(rate: Decimal) -> Result<Self, DomainError> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(DomainError::RateOutOfRange(rate));
        }
        Ok(Self::Percentage { rate })
    }

    /// A flat discount. `amount` must not be negative.
    pub fn fixed(amount: Decimal) -> Result<Self, DomainError> {
        if amount < Decimal::ZERO {
            return Err(DomainError::NegativeAmount(amount));
        }
        Ok(Self::Fixed { amount })
    }

    pub fn kind(&self) -> DiscountKind {
        match self {
            Self::Percentage { .. } => DiscountKind::Percentage,
            Self::Fixed { .. } => DiscountKind::Fixed,
        }
    }

    /// Applies the policy to `price`, producing a single-step result.
    ///
    /// Fixed discounts are capped at the price itself, and the final price is
    /// clamped at zero even though both arms already bound the discount.
    pub fn apply(&self, price: Decimal) -> PriceResult {
        let nominal = match self {
            Self::Percentage { rate } => price * rate,
            Self::Fixed { amount } => (*amount).min(price),
        };
        let discounted = (price - nominal).max(Decimal::ZERO);

        PriceResult {
            original: price,
            discounted,
            discount_amount: price - discounted,
            discount_types: vec![self.kind()],
        }
    }
}

/// Outcome of one or more policy applications.
///
/// Invariants: `discounted == original - discount_amount`, both `discounted`
/// and `discount_amount` are non-negative, and `discount_types` lists the
/// applied kinds in application order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    pub original: Decimal,
    pub discounted: Decimal,
    pub discount_amount: Decimal,
    pub discount_types: Vec<DiscountKind>,
}

impl PriceResult {
    /// Identity result: seeds a calculation before any discount applies.
    pub fn unchanged(price: Decimal) -> Self {
        Self {
            original: price,
            discounted: price,
            discount_amount: Decimal::ZERO,
            discount_types: Vec::new(),
        }
    }

    /// Applies `policy` to the running discounted price and folds the step
    /// into the accumulated result. `original` stays the pre-discount price.
    pub fn chain(&self, policy: &DiscountPolicy) -> Self {
        let step = policy.apply(self.discounted);
        let mut discount_types = self.discount_types.clone();
        discount_types.extend(step.discount_types);

        Self {
            original: self.original,
            discounted: step.discounted,
            discount_amount: self.discount_amount + step.discount_amount,
            discount_types,
        }
    }

    /// Deduplicates kind tags by first occurrence, preserving order. The
    /// per-application history is collapsed exactly once, at the end of a
    /// calculation.
    pub fn dedup_kinds(mut self) -> Self {
        let mut seen = HashSet::new();
        self.discount_types.retain(|kind| seen.insert(*kind));
        self
    }
}
