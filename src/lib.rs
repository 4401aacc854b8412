//! Vending - Attribute-grammar validator for nested vending machine strings
//!
//! This crate re-exports all layers of the system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: vending_runtime     - REPL, batch mode, CLI
//! Layer 2: vending_report      - Verdict formatters (trace, JSON, tree)
//! Layer 1: vending_language    - Tokenizer, evaluator, derivation tree
//! Layer 0: vending_foundation  - Core types (Symbol, Limits, Error)
//! ```

pub use vending_foundation as foundation;
pub use vending_language as language;
pub use vending_report as report;
pub use vending_runtime as runtime;

pub use vending_language::validate;
