//! The attribute-grammar evaluator.
//!
//! Grammar, with the attributes each construct carries:
//!
//! ```text
//! P → C                 P.balance = C.balance
//! C → A C | ε           balance threads left to right through the As
//! A → $                 balance + 1
//! A → <                 balance - 1            (needs balance ≥ 1)
//! A → R                 balance - cost         (needs quota left, balance ≥ cost)
//! A → { C }             C.depth = A.depth + 1  (inherited, ≤ max depth)
//!                       C.balance_in = A.balance_in (inherited)
//!                       A.balance_out = C.balance_out (synthesized)
//! ```
//!
//! The walk is a single left-to-right pass over the lexer's tokens. Nesting is
//! tracked with a bounded [`ScopeStack`] rather than recursion, so memory is
//! bounded by the depth limit plus the recorded trace.

use tracing::{debug, trace};
use vending_foundation::Symbol;

use crate::config::{EvaluatorConfig, RefundPolicy};
use crate::lexer::Lexer;
use crate::scope::ScopeStack;
use crate::verdict::{Step, Verdict, Violation, ViolationKind};

/// The result of evaluating one input: the verdict plus the attribute trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Accept/reject decision.
    pub verdict: Verdict,
    /// One step per successfully processed symbol, in input order.
    pub trace: Vec<Step>,
}

impl Evaluation {
    /// Returns true if the input was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }

    /// Returns the recorded steps.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.trace
    }
}

/// Evaluates vending strings against a fixed configuration.
///
/// The evaluator holds no per-input state, so one instance can be shared
/// freely, including across threads.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    /// Creates an evaluator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with the given configuration.
    #[must_use]
    pub const fn with_config(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluates `input`, stopping at the first violation.
    #[must_use]
    pub fn evaluate(&self, input: &str) -> Evaluation {
        let mut state = EvaluationState::new(&self.config);
        let verdict = state.run(Lexer::new(input));

        match &verdict {
            Verdict::Accepted { balance, purchases } => {
                debug!(balance, purchases, symbols = state.processed, "input accepted");
            }
            Verdict::Rejected(violation) => {
                debug!(
                    kind = violation.kind.name(),
                    index = violation.index,
                    "input rejected: {violation}"
                );
            }
        }

        Evaluation {
            verdict,
            trace: state.trace,
        }
    }
}

/// Attribute context threaded through one walk.
struct EvaluationState<'cfg> {
    config: &'cfg EvaluatorConfig,
    scopes: ScopeStack,
    /// Number of symbols processed so far (the index of the next one).
    processed: usize,
    trace: Vec<Step>,
}

impl<'cfg> EvaluationState<'cfg> {
    fn new(config: &'cfg EvaluatorConfig) -> Self {
        Self {
            config,
            scopes: ScopeStack::new(config.limits.max_depth),
            processed: 0,
            trace: Vec::new(),
        }
    }

    /// Consumes tokens until the input ends or a violation occurs.
    fn run(&mut self, tokens: Lexer<'_>) -> Verdict {
        for token in tokens {
            let token = match token {
                Ok(token) => token,
                Err(violation) => return Verdict::Rejected(violation),
            };

            let index = self.processed;
            if let Err(kind) = self.apply(token.symbol) {
                return Verdict::Rejected(Violation::new(kind, index));
            }
            self.processed += 1;
            self.record(index, token.symbol);
        }

        self.finish()
    }

    /// Applies one symbol to the current scope.
    fn apply(&mut self, symbol: Symbol) -> Result<(), ViolationKind> {
        let limits = self.config.limits;

        match symbol {
            Symbol::Open => {
                self.scopes
                    .open()
                    .map_err(|depth| ViolationKind::DepthExceeded {
                        depth,
                        limit: limits.max_depth,
                    })?;
            }
            Symbol::Close => {
                self.scopes.close().ok_or(ViolationKind::UnmatchedClose)?;
            }
            Symbol::Coin => {
                let scope = self.scopes.current_mut();
                scope.balance = scope.balance.saturating_add(1);
            }
            Symbol::Return => {
                let scope = self.scopes.current_mut();
                if scope.balance < 1 {
                    return Err(ViolationKind::InsufficientBalance {
                        symbol,
                        balance: scope.balance,
                        required: 1,
                    });
                }
                scope.balance -= 1;
            }
            Symbol::Purchase => {
                let scope = self.scopes.current_mut();
                // Quota is checked before balance.
                if scope.purchases >= limits.purchase_quota {
                    return Err(ViolationKind::PurchaseQuotaExceeded {
                        quota: limits.purchase_quota,
                    });
                }
                if scope.balance < limits.purchase_cost {
                    return Err(ViolationKind::InsufficientBalance {
                        symbol,
                        balance: scope.balance,
                        required: limits.purchase_cost,
                    });
                }
                scope.balance -= limits.purchase_cost;
                scope.purchases += 1;
            }
        }

        Ok(())
    }

    fn record(&mut self, index: usize, symbol: Symbol) {
        let scope = *self.scopes.current();
        trace!(
            index,
            symbol = %symbol,
            depth = scope.depth,
            balance = scope.balance,
            purchases = scope.purchases,
            "processed symbol"
        );

        if self.config.record_trace {
            self.trace.push(Step {
                index,
                symbol,
                depth: scope.depth,
                balance: scope.balance,
                purchases: scope.purchases,
            });
        }
    }

    /// End-of-input checks.
    fn finish(&self) -> Verdict {
        let open = self.scopes.open_count();
        if open > 0 {
            return Verdict::Rejected(Violation::new(
                ViolationKind::UnclosedScope {
                    open: u32::try_from(open).unwrap_or(u32::MAX),
                },
                self.processed,
            ));
        }

        let root = self.scopes.root();
        if self.config.refund_policy == RefundPolicy::Strict && root.balance != 0 {
            return Verdict::Rejected(Violation::new(
                ViolationKind::UnrefundedBalance {
                    balance: root.balance,
                },
                self.processed,
            ));
        }

        Verdict::Accepted {
            balance: root.balance,
            purchases: root.purchases,
        }
    }
}
