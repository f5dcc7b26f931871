//! Conjunctive filter state and result ordering.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::catalog::Product;
use crate::money::Money;

/// Stock-status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Availability {
    #[default]
    All,
    InStock,
    OutOfStock,
}

/// Active filter selections.
///
/// Dimensions combine with AND; within a dimension an empty selection
/// list means "no constraint".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FilterSet {
    /// Inclusive price bounds.
    pub price_range: Option<(Money, Money)>,
    pub categories: Vec<String>,
    pub rooms: Vec<String>,
    pub styles: Vec<String>,
    pub availability: Availability,
}

impl FilterSet {
    /// Whether a product passes every active dimension.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some((lo, hi)) = self.price_range {
            if product.price.amount_minor < lo.amount_minor
                || product.price.amount_minor > hi.amount_minor
            {
                return false;
            }
        }
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        if !self.rooms.is_empty() && !self.rooms.contains(&product.room) {
            return false;
        }
        if !self.styles.is_empty()
            && !product.styles.iter().any(|style| self.styles.contains(style))
        {
            return false;
        }
        match self.availability {
            Availability::All => true,
            Availability::InStock => product.in_stock,
            Availability::OutOfStock => !product.in_stock,
        }
    }

    /// Narrow a collection to the products passing the filter.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect()
    }

    /// Number of non-default dimensions, for the filter badge.
    pub fn active_count(&self) -> usize {
        [
            self.price_range.is_some(),
            !self.categories.is_empty(),
            !self.rooms.is_empty(),
            !self.styles.is_empty(),
            self.availability != Availability::All,
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    /// Whether no dimension is active.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

/// Result orderings offered by the shop page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOption {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    Newest,
    Rating,
    Popular,
}

impl SortOption {
    /// Human-readable name for the sort dropdown.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Newest => "Newest",
            SortOption::Rating => "Highest Rated",
            SortOption::Popular => "Most Popular",
        }
    }
}

/// Sort products in place. All orderings are stable, so flag-driven
/// sorts (Featured, Newest) keep the incoming order within each group.
pub fn sort_products(products: &mut [Product], sort: SortOption) {
    match sort {
        SortOption::Featured => products.sort_by_key(|p| !p.is_bestseller),
        SortOption::PriceAsc => products.sort_by_key(|p| p.price.amount_minor),
        SortOption::PriceDesc => products.sort_by_key(|p| Reverse(p.price.amount_minor)),
        SortOption::Newest => products.sort_by_key(|p| !p.is_new),
        SortOption::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOption::Popular => products.sort_by_key(|p| Reverse(p.review_count)),
    }
}
