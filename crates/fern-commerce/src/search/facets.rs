//! Filterable dimensions of a product collection.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::money::Money;

/// The facet values present in whatever collection is currently in view.
///
/// Facets are recomputed from the visible products, so narrowing a
/// result set narrows the offered filter values with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchFacets {
    /// Distinct categories, first-seen order.
    pub categories: Vec<String>,
    /// Distinct department shelves, first-seen order.
    pub rooms: Vec<String>,
    /// Distinct style tags, first-seen order.
    pub styles: Vec<String>,
    /// Lowest and highest price, `None` for an empty collection.
    pub price_range: Option<(Money, Money)>,
}

impl SearchFacets {
    /// Collect facets from a product collection.
    pub fn from_products(products: &[Product]) -> Self {
        let categories = distinct(products.iter().map(|p| p.category.clone()));
        let rooms = distinct(products.iter().map(|p| p.room.clone()));
        let styles = distinct(products.iter().flat_map(|p| p.styles.iter().cloned()));

        let price_range = products.first().map(|first| {
            let currency = first.price.currency;
            let mut lo = first.price.amount_minor;
            let mut hi = lo;
            for product in &products[1..] {
                lo = lo.min(product.price.amount_minor);
                hi = hi.max(product.price.amount_minor);
            }
            (Money::new(lo, currency), Money::new(hi, currency))
        });

        Self {
            categories,
            rooms,
            styles,
            price_range,
        }
    }
}

/// Deduplicate, keeping first-seen order.
pub(crate) fn distinct(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
