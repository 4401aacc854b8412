//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use std::error::Error as _;
use std::io;

use vending_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_io_keeps_source() {
    let err = Error::io(
        "strings.txt",
        io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    );
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
    assert!(err.kind.source().is_some());
    assert_eq!(err.to_string(), "strings.txt: denied");
}

#[test]
fn error_invalid_argument() {
    let err = Error::invalid_argument("unknown option: -x");
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
    assert!(err.to_string().contains("-x"));
}

#[test]
fn error_editor() {
    let err = Error::editor("terminal closed");
    assert!(matches!(err.kind, ErrorKind::Editor(_)));
    assert_eq!(err.to_string(), "editor error: terminal closed");
}

#[test]
fn error_internal() {
    let err = Error::internal("oops");
    assert!(matches!(err.kind, ErrorKind::Internal(_)));
    assert!(err.to_string().contains("oops"));
}

#[test]
fn error_question_mark_from_io() {
    fn write_fails() -> vending_foundation::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"))?;
        Ok(())
    }

    let err = write_fails().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Stream(_)));
    assert!(err.to_string().contains("pipe"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display() {
    assert_eq!(ErrorContext::new().to_string(), "");
    assert_eq!(
        ErrorContext::new().with_source("a.txt").to_string(),
        "at a.txt"
    );
    assert_eq!(
        ErrorContext::new()
            .with_source("a.txt")
            .with_line(2)
            .to_string(),
        "at a.txt:2"
    );
}

#[test]
fn context_is_optional() {
    let err = Error::internal("x");
    assert!(err.context.is_none());

    let err = err.with_context(ErrorContext::new().with_line(7));
    assert_eq!(err.context.and_then(|c| c.line), Some(7));
}
