use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::discount::DiscountPolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromotionId(pub Uuid);

/// A non-code discount applied automatically. Candidates compete on
/// `apply_priority`; the engine applies at most one per calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: PromotionId,
    /// Reported as the applied-policy label when the promotion fires.
    pub name: String,
    pub discount_policy: DiscountPolicy,
    /// Only promotions flagged true may be applied automatically.
    pub is_auto_discount: bool,
    /// Lower value wins when several promotions are candidates.
    pub apply_priority: i32,
}
