//! Storefront service layer for the Fernwell body-care shop.
//!
//! Where [`fern_commerce`] is pure domain logic, this crate wires that
//! logic to its collaborators:
//!
//! - **Sessions**: cart, wishlist, recently viewed, comparison tray, each
//!   persisted through a [`fern_store::KvStore`]
//! - **Catalog sources**: the built-in demo catalog and remote ingestion
//! - **Checkout**: the request/response exchange with the hosted checkout
//! - **Reviews**: aggregation of hosted review data onto products
//!
//! Transport stays with the host; every remote exchange here is expressed
//! as build-the-request / parse-the-response string functions.
//!
//! # Example
//!
//! ```
//! use fern_store::MemoryStore;
//! use fern_storefront::prelude::*;
//!
//! let store = MemoryStore::new();
//! let catalog = demo_catalog();
//!
//! let mut cart = CartSession::open(&store);
//! cart.add_item(catalog[0].clone(), 2, None);
//! assert_eq!(cart.state().item_count(), 2);
//!
//! // The same store restores the cart on the next visit.
//! let cart = CartSession::open(&store);
//! assert_eq!(cart.state().item_count(), 2);
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod comparison;
pub mod error;
pub mod notify;
pub mod recently_viewed;
pub mod remote;
pub mod reviews;
pub mod wishlist;

pub use error::{BackendError, CatalogError, StorefrontError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{BackendError, CatalogError, StorefrontError};

    // Sessions
    pub use crate::cart::CartSession;
    pub use crate::comparison::ComparisonTray;
    pub use crate::recently_viewed::RecentlyViewed;
    pub use crate::wishlist::{WishlistBackend, WishlistService, WishlistToggle};

    // Catalog
    pub use crate::catalog::{demo_catalog, demo_collections};
    pub use crate::remote::{catalog_request, parse_catalog_response, RemoteProduct};

    // Checkout and reviews
    pub use crate::checkout::{
        checkout_lines, checkout_request, parse_checkout_response, CheckoutLine,
    };
    pub use crate::reviews::{apply_summaries, summarize_reviews, ReviewSummary};

    // Notifications
    pub use crate::notify::{Notifier, NullNotifier, Severity, TracingNotifier};
}
