//! Integration tests for the lexer
//!
//! Tests tokenization of vending strings.

use vending_language::{Lexer, Symbol, ViolationKind};

fn symbols(source: &str) -> Vec<Symbol> {
    Lexer::tokenize_all(source)
        .unwrap()
        .into_iter()
        .map(|t| t.symbol)
        .collect()
}

// =============================================================================
// Basic Tokens
// =============================================================================

#[test]
fn tokenize_empty() {
    assert!(Lexer::tokenize_all("").unwrap().is_empty());
    assert!(Lexer::tokenize_all(" \t\n").unwrap().is_empty());
}

#[test]
fn tokenize_alphabet() {
    assert_eq!(
        symbols("$R<{}"),
        vec![
            Symbol::Coin,
            Symbol::Purchase,
            Symbol::Return,
            Symbol::Open,
            Symbol::Close,
        ]
    );
}

#[test]
fn tokenize_skips_whitespace() {
    assert_eq!(symbols(" $ \n\t R "), vec![Symbol::Coin, Symbol::Purchase]);
}

// =============================================================================
// Spans
// =============================================================================

#[test]
fn spans_track_bytes_and_chars() {
    let tokens = Lexer::tokenize_all("  $ R").unwrap();
    assert_eq!(tokens[0].span.start, 2);
    assert_eq!(tokens[0].span.char_index, 2);
    assert_eq!(tokens[1].text("  $ R"), "R");
}

#[test]
fn spans_after_multibyte_whitespace() {
    let source = "\u{3000}$";
    let tokens = Lexer::tokenize_all(source).unwrap();
    assert_eq!(tokens[0].span.start, 3);
    assert_eq!(tokens[0].span.char_index, 1);
    assert_eq!(tokens[0].span.len(), 1);
    assert_eq!(tokens[0].text(source), "$");
}

// =============================================================================
// Unknown Symbols
// =============================================================================

#[test]
fn unknown_symbol_reports_char_index() {
    let err = Lexer::tokenize_all("$ $ x").unwrap_err();
    assert_eq!(err.kind, ViolationKind::UnknownSymbol { found: 'x' });
    assert_eq!(err.index, 4);
    assert_eq!(err.found(), Some('x'));
}

#[test]
fn unknown_symbol_counts_chars_not_bytes() {
    let err = Lexer::tokenize_all("ü$ü").unwrap_err();
    assert_eq!(err.index, 0);

    let err = Lexer::tokenize_all("$\u{3000}?").unwrap_err();
    assert_eq!(err.index, 2);
}

#[test]
fn lexer_stops_after_unknown_symbol() {
    let mut lexer = Lexer::new("a$");
    assert!(matches!(lexer.next(), Some(Err(_))));
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn lexer_is_lazy() {
    let mut lexer = Lexer::new("$ ! $");
    assert!(matches!(lexer.next(), Some(Ok(t)) if t.symbol == Symbol::Coin));
    assert!(matches!(lexer.next(), Some(Err(_))));
}
