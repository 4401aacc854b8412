//! Tokens produced by the lexer.

use vending_foundation::Symbol;

use crate::span::Span;

/// A symbol together with its location in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// The operation this token denotes.
    pub symbol: Symbol,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(symbol: Symbol, span: Span) -> Self {
        Self { symbol, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}
