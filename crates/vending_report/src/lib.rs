//! Verdict reporters for the vending grammar validator.
//!
//! This crate turns an [`Evaluation`](vending_language::Evaluation) into
//! display lines. It contains no decision logic.
//!
//! - [`VerdictFormatter`] - Trait shared by all formatters
//! - [`HumanFormatter`] - One line per processed symbol
//! - [`JsonFormatter`] - Machine-readable steps and verdict
//! - [`TreeFormatter`] - Decorated derivation tree, visual or indented
//! - [`ReportConfig`] - Format selection and options

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod format;
pub mod tree;

pub use config::{ReportConfig, ReportFormat, UnknownFormat};
pub use format::{HumanFormatter, JsonFormatter, VerdictFormatter, summary_line};
pub use tree::{TreeFormatter, TreeStyle};
