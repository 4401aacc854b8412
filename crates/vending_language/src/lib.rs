//! Tokenizer, attribute-grammar evaluator, and derivation trees.
//!
//! An input string flows through three stages:
//!
//! ```text
//! "$$$ { R }"
//!      │
//!      ▼
//! ┌─────────────────┐
//! │   LEXER         │  → [Coin, Coin, Coin, Open, Purchase, Close]
//! └─────────────────┘
//!      │
//!      ▼
//! ┌─────────────────┐
//! │   EVALUATOR     │  → depth/balance inherited at `{`,
//! │                 │    balance synthesized at `}`
//! └─────────────────┘
//!      │
//!      ▼
//! ┌─────────────────┐
//! │   VERDICT       │  → Accepted { balance: 0, .. } + per-symbol trace
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`lexer`] - Lazy conversion of raw text into [`Token`]s
//! - [`scope`] - Bounded stack of nesting scopes
//! - [`evaluator`] - The single-pass attribute walk
//! - [`verdict`] - Verdicts, violations, and trace steps
//! - [`tree`] - Decorated derivation tree rebuilt from a trace
//! - [`config`] - Evaluator configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod evaluator;
pub mod lexer;
pub mod scope;
pub mod span;
pub mod token;
pub mod tree;
pub mod verdict;


pub use config::{EvaluatorConfig, RefundPolicy};
pub use evaluator::{Evaluation, Evaluator};
pub use lexer::Lexer;
pub use scope::{Scope, ScopeStack};
pub use span::Span;
pub use token::Token;
pub use tree::{DerivationTree, Node, NodeId, NodeKind};
pub use verdict::{Step, Verdict, Violation, ViolationKind};

pub use vending_foundation::{Limits, Symbol};

/// Validates `input` with the standard machine limits and lenient refunds.
///
/// Each call owns its own evaluation state; repeated calls on the same input
/// return equal verdicts.
#[must_use]
pub fn validate(input: &str) -> Verdict {
    Evaluator::with_config(EvaluatorConfig::default().with_trace(false))
        .evaluate(input)
        .verdict
}
