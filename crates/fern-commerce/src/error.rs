//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in commerce calculations.
///
/// The cart reducer and the search engine are total functions and never
/// return these; only explicit money arithmetic does.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
