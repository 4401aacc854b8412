//! Lexer for vending strings.
//!
//! The lexer is a lazy iterator over the input: it yields one [`Token`] per
//! non-whitespace character and stops for good at the first character that
//! is not part of the alphabet.

use std::iter::FusedIterator;
use std::str::CharIndices;

use vending_foundation::Symbol;

use crate::span::Span;
use crate::token::Token;
use crate::verdict::{Violation, ViolationKind};

/// Lexer over a borrowed source string.
pub struct Lexer<'src> {
    /// Remaining characters with their byte offsets.
    chars: CharIndices<'src>,
    /// Character index of the next character `chars` will yield.
    char_index: usize,
    /// Set once an unknown character has been reported.
    failed: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            chars: source.char_indices(),
            char_index: 0,
            failed: false,
        }
    }

    /// Tokenizes all of `source` eagerly.
    ///
    /// # Errors
    ///
    /// Returns the first [`ViolationKind::UnknownSymbol`] encountered.
    pub fn tokenize_all(source: &str) -> Result<Vec<Token>, Violation> {
        Lexer::new(source).collect()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Violation>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for (offset, c) in self.chars.by_ref() {
            let index = self.char_index;
            self.char_index += 1;

            if c.is_whitespace() {
                continue;
            }

            let span = Span::new(offset, offset + c.len_utf8(), index);
            return Some(match Symbol::from_char(c) {
                Some(symbol) => Ok(Token::new(symbol, span)),
                None => {
                    self.failed = true;
                    Err(Violation::new(
                        ViolationKind::UnknownSymbol { found: c },
                        index,
                    ))
                }
            });
        }

        None
    }
}

impl FusedIterator for Lexer<'_> {}
