//! Commerce domain core for the Fernwell storefront.
//!
//! This crate provides the pure domain logic behind the shop:
//!
//! - **Catalog**: products, curated collections, the style quiz
//! - **Cart**: an action reducer with derived pricing
//! - **Search**: fuzzy ranked search, suggestions, facets, filters
//!
//! Everything here is synchronous and host-agnostic; persistence and
//! external collaborators live in the storefront layer.
//!
//! # Example
//!
//! ```
//! use fern_commerce::prelude::*;
//!
//! let butter = Product::new(
//!     "1",
//!     "Lavender Dreams Body Butter",
//!     Money::new(2499, Currency::INR),
//! );
//!
//! let cart = CartState::default().apply(CartAction::AddItem {
//!     product: butter,
//!     quantity: 2,
//!     variant: None,
//! });
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.subtotal().amount_minor, 4998);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        products_by_style, score_answers, style_quiz, Collection, Product, QuizOption,
        QuizQuestion,
    };

    // Cart
    pub use crate::cart::{
        lookup_promo, CartAction, CartLineItem, CartSnapshot, CartState, CartTotals,
    };

    // Search
    pub use crate::search::{
        highlight_match, search_products, search_stats, search_suggestions, similarity,
        sort_products, Availability, FilterSet, SearchFacets, SearchStats, SearchSuggestions,
        SortOption,
    };
}
