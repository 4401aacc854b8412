//! Verdicts, violations, and trace steps.
//!
//! A [`Verdict`] is the one structured outcome of evaluating an input.
//! Rejections carry a [`Violation`]: what went wrong and at which index.
//! Indices count symbols in the token sequence, except for
//! [`ViolationKind::UnknownSymbol`], whose index is the character position in
//! the raw input (the offending character never became a symbol).

use std::fmt;

use thiserror::Error;
use vending_foundation::Symbol;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of one validation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "kebab-case"))]
pub enum Verdict {
    /// Every symbol was valid and all scopes were closed.
    Accepted {
        /// Coins left in the top-level scope.
        balance: u32,
        /// Purchases made directly in the top-level scope.
        purchases: u32,
    },
    /// The walk stopped at the first violation.
    Rejected(Violation),
}

impl Verdict {
    /// Returns true if the input was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns the final top-level balance of an accepted input.
    #[must_use]
    pub const fn balance(&self) -> Option<u32> {
        match self {
            Self::Accepted { balance, .. } => Some(*balance),
            Self::Rejected(_) => None,
        }
    }

    /// Returns the violation of a rejected input.
    #[must_use]
    pub const fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(violation) => Some(violation),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted { balance, purchases } => {
                write!(f, "accepted (balance {balance}, purchases {purchases})")
            }
            Self::Rejected(violation) => write!(f, "rejected: {violation}"),
        }
    }
}

/// A violated grammar rule and where it happened.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error("{kind} at index {index}")]
pub struct Violation {
    /// What went wrong.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: ViolationKind,
    /// Position of the offending symbol, or one past the last symbol for
    /// end-of-input violations.
    pub index: usize,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub const fn new(kind: ViolationKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// Returns the symbol that triggered this violation, if any.
    ///
    /// End-of-input violations and unknown characters have none.
    #[must_use]
    pub const fn symbol(&self) -> Option<Symbol> {
        match self.kind {
            ViolationKind::DepthExceeded { .. } => Some(Symbol::Open),
            ViolationKind::UnmatchedClose => Some(Symbol::Close),
            ViolationKind::InsufficientBalance { symbol, .. } => Some(symbol),
            ViolationKind::PurchaseQuotaExceeded { .. } => Some(Symbol::Purchase),
            ViolationKind::UnknownSymbol { .. }
            | ViolationKind::UnclosedScope { .. }
            | ViolationKind::UnrefundedBalance { .. } => None,
        }
    }

    /// Returns the offending character as written in the input, if any.
    #[must_use]
    pub const fn found(&self) -> Option<char> {
        match self.kind {
            ViolationKind::UnknownSymbol { found } => Some(found),
            _ => match self.symbol() {
                Some(symbol) => Some(symbol.as_char()),
                None => None,
            },
        }
    }
}

/// Categorized violation kinds.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum ViolationKind {
    /// A character outside the alphabet.
    #[error("unknown symbol '{found}'")]
    UnknownSymbol {
        /// The character that was found.
        found: char,
    },

    /// A `{` would nest deeper than allowed.
    #[error("nesting depth {depth} exceeds the limit of {limit}")]
    DepthExceeded {
        /// Depth the scope would have had.
        depth: u32,
        /// The configured limit.
        limit: u32,
    },

    /// A `}` with no open scope.
    #[error("'}}' without a matching '{{'")]
    UnmatchedClose,

    /// Input ended inside one or more scopes.
    #[error("{open} scope(s) still open at end of input")]
    UnclosedScope {
        /// Number of scopes left open.
        open: u32,
    },

    /// A return or purchase without enough coins.
    #[error("insufficient balance for {}: have {balance}, need {required}", .symbol.name())]
    InsufficientBalance {
        /// The operation that was attempted.
        symbol: Symbol,
        /// Coins available in the active scope.
        balance: u32,
        /// Coins the operation needs.
        required: u32,
    },

    /// A purchase after the scope's quota was met.
    #[error("purchase quota of {quota} already met in this scope")]
    PurchaseQuotaExceeded {
        /// The configured quota.
        quota: u32,
    },

    /// Coins left over under the strict refund policy.
    #[error("{balance} coin(s) left unrefunded at end of input")]
    UnrefundedBalance {
        /// Final top-level balance.
        balance: u32,
    },
}

impl ViolationKind {
    /// Returns a short kebab-case name for this kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UnknownSymbol { .. } => "unknown-symbol",
            Self::DepthExceeded { .. } => "depth-exceeded",
            Self::UnmatchedClose => "unmatched-close",
            Self::UnclosedScope { .. } => "unclosed-scope",
            Self::InsufficientBalance { .. } => "insufficient-balance",
            Self::PurchaseQuotaExceeded { .. } => "purchase-quota-exceeded",
            Self::UnrefundedBalance { .. } => "unrefunded-balance",
        }
    }
}

/// Attribute snapshot taken after a symbol was processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    /// Position of the symbol in the token sequence.
    pub index: usize,
    /// The symbol that was processed.
    pub symbol: Symbol,
    /// Depth of the active scope afterwards.
    pub depth: u32,
    /// Balance of the active scope afterwards.
    pub balance: u32,
    /// Purchases made in the active scope so far.
    pub purchases: u32,
}
