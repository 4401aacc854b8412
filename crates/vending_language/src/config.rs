//! Configuration for the evaluator.

use vending_foundation::Limits;

/// What to do with coins left in the top-level scope at the end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefundPolicy {
    /// Leftover coins are allowed and reported in the verdict.
    #[default]
    Lenient,
    /// The final top-level balance must be zero.
    Strict,
}

/// Configuration for an [`Evaluator`](crate::Evaluator).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Depth, price, and quota bounds.
    pub limits: Limits,

    /// Acceptance rule for the final balance.
    pub refund_policy: RefundPolicy,

    /// Whether to record a [`Step`](crate::Step) per processed symbol.
    pub record_trace: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            refund_policy: RefundPolicy::Lenient,
            record_trace: true,
        }
    }
}

impl EvaluatorConfig {
    /// Creates a configuration that requires every coin to be spent or returned.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            refund_policy: RefundPolicy::Strict,
            ..Self::default()
        }
    }

    /// Builder method to set the machine limits.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Builder method to set the refund policy.
    #[must_use]
    pub fn with_refund_policy(mut self, policy: RefundPolicy) -> Self {
        self.refund_policy = policy;
        self
    }

    /// Builder method to enable/disable trace recording.
    #[must_use]
    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }
}
