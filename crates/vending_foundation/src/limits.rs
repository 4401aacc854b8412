//! Machine limits.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bounds the evaluator enforces while walking an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Limits {
    /// Maximum number of nested `{ }` levels.
    pub max_depth: u32,
    /// Coins consumed by one purchase.
    pub purchase_cost: u32,
    /// Purchases allowed directly inside one scope.
    pub purchase_quota: u32,
}

impl Limits {
    /// Default nesting bound.
    pub const DEFAULT_MAX_DEPTH: u32 = 3;
    /// Default price of a drink.
    pub const DEFAULT_PURCHASE_COST: u32 = 3;
    /// Default purchases per scope.
    pub const DEFAULT_PURCHASE_QUOTA: u32 = 3;

    /// Creates the standard machine limits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            purchase_cost: Self::DEFAULT_PURCHASE_COST,
            purchase_quota: Self::DEFAULT_PURCHASE_QUOTA,
        }
    }

    /// Builder method to set the nesting bound.
    #[must_use]
    pub const fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Builder method to set the purchase price.
    #[must_use]
    pub const fn with_purchase_cost(mut self, cost: u32) -> Self {
        self.purchase_cost = cost;
        self
    }

    /// Builder method to set the per-scope purchase quota.
    #[must_use]
    pub const fn with_purchase_quota(mut self, quota: u32) -> Self {
        self.purchase_quota = quota;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}
