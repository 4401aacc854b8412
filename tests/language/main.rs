//! Integration tests for Layer 1: Language
//!
//! Tests for the lexer, the attribute evaluator, and derivation trees.

mod evaluator;
mod lexer;
mod properties;
