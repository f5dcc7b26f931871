//! Storefront error types.

use thiserror::Error;

/// Errors from storefront operations.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Checkout was requested for a cart with no items.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// The commerce backend rejected or garbled the checkout exchange.
    #[error("Checkout failed: {0}")]
    Checkout(String),
}

/// Errors from remote catalog ingestion.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The remote endpoint answered with errors of its own.
    #[error("Remote catalog error: {0}")]
    Remote(String),

    /// The response body was not the expected shape.
    #[error("Malformed catalog response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Malformed(e.to_string())
    }
}

/// An error reported by the hosted account backend.
///
/// The backend is an opaque collaborator; its message is all we carry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Backend error: {0}")]
pub struct BackendError(pub String);

impl BackendError {
    /// Wrap a backend failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
