use serde::{Deserialize, Serialize};

use crate::domain::user::{User, UserId};

/// Who a discount applies to.
///
/// Stored tag values this build does not understand deserialize as
/// `Unknown`, and every eligibility check treats `Unknown` as ineligible:
/// the match stays total and never panics on foreign data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountTarget {
    All,
    Product { product_code: String },
    User { user_id: UserId },
    #[serde(other)]
    Unknown,
}

impl DiscountTarget {
    /// Whether this target covers the given product/user pair. A user-scoped
    /// target with no user present fails closed.
    pub fn matches(&self, user: Option<&User>, product_code: &str) -> bool {
        match self {
            Self::All => true,
            Self::Product { product_code: target } => target == product_code,
            Self::User { user_id } => user.is_some_and(|user| user.id == *user_id),
            Self::Unknown => false,
        }
    }
}
