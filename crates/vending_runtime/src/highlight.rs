//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use vending_language::Symbol;

/// Highlighter for machine input lines.
pub struct VendingHighlighter {}

impl VendingHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.is_empty() {
            return Cow::Borrowed(line);
        }

        // Commands are shown as a single unit.
        if line.trim_start().starts_with(':') {
            return Cow::Owned(format!("\x1b[36m{line}\x1b[0m"));
        }

        let mut result = String::with_capacity(line.len() * 4);

        for c in line.chars() {
            let color = match Symbol::from_char(c) {
                Some(Symbol::Coin) => "\x1b[33m",     // yellow
                Some(Symbol::Purchase) => "\x1b[32m", // green
                Some(Symbol::Return) => "\x1b[35m",   // magenta
                Some(Symbol::Open | Symbol::Close) => "\x1b[1m",
                None if c.is_whitespace() => "",
                None => "\x1b[4;31m", // underlined red
            };

            if color.is_empty() {
                result.push(c);
            } else {
                result.push_str(color);
                result.push(c);
                result.push_str("\x1b[0m");
            }
        }

        Cow::Owned(result)
    }
}

impl Default for VendingHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
