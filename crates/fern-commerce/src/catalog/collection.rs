//! Curated product collections.

use serde::{Deserialize, Serialize};

use super::product::Product;
use crate::ids::ProductId;

/// A hand-curated grouping of catalog products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    /// Display name.
    pub name: String,
    /// Short blurb shown under the name.
    pub description: String,
    /// Member products, in display order.
    pub product_ids: Vec<ProductId>,
    /// Hero image URL.
    pub image: String,
}

impl Collection {
    /// Create a collection.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        product_ids: Vec<ProductId>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            product_ids,
            image: image.into(),
        }
    }

    /// Resolve member ids against a catalog, keeping collection order.
    /// Ids with no matching product are skipped.
    pub fn resolve(&self, catalog: &[Product]) -> Vec<Product> {
        self.product_ids
            .iter()
            .filter_map(|id| catalog.iter().find(|product| &product.id == id))
            .cloned()
            .collect()
    }
}
