//! Core types, machine limits, and errors for the vending grammar validator.
//!
//! This crate provides:
//! - [`Symbol`] - The five-symbol operation alphabet
//! - [`Limits`] - Depth, price, and quota bounds of the machine
//! - [`Error`] - Rich error types with context for the outer shells

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod limits;
pub mod symbol;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use limits::Limits;
pub use symbol::Symbol;
