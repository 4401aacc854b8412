//! REPL, batch mode, and CLI for the vending grammar validator.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop over a [`LineEditor`]
//! - [`BatchRunner`] - Line-by-line validation of input files
//! - The `vending` binary that dispatches between the two

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod editor;
pub mod highlight;
pub mod repl;

pub use batch::{BatchRunner, BatchSummary, default_output_path};
pub use editor::{LineEditor, ReadResult, RustylineEditor, is_complete};
pub use highlight::VendingHighlighter;
pub use repl::{Repl, Response, error_line};
