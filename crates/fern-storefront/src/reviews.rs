//! Client-side aggregation of hosted review data.
//!
//! Review rows live in the account backend; the storefront only aggregates
//! them and overlays the results onto catalog products so sorting and display
//! run on live figures instead of the shipped ones.

use std::collections::HashMap;

use fern_commerce::catalog::Product;
use fern_commerce::ids::ProductId;

/// Aggregated review figures for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary {
    pub product_id: ProductId,
    pub average_rating: f64,
    pub total_reviews: i64,
}

impl ReviewSummary {
    fn empty(product_id: ProductId) -> Self {
        Self {
            product_id,
            average_rating: 0.0,
            total_reviews: 0,
        }
    }
}

/// Aggregate raw review rows into per-product summaries.
///
/// Every requested product gets an entry, zeroed when it has no reviews, so
/// callers can overlay the map without checking membership first. The
/// average is the plain mean of the product's ratings.
pub fn summarize_reviews(
    rows: &[(ProductId, i32)],
    requested: &[ProductId],
) -> HashMap<ProductId, ReviewSummary> {
    let mut summaries: HashMap<ProductId, ReviewSummary> = requested
        .iter()
        .map(|id| (id.clone(), ReviewSummary::empty(id.clone())))
        .collect();

    let mut grouped: HashMap<&ProductId, (i64, i64)> = HashMap::new();
    for (product_id, rating) in rows {
        let entry = grouped.entry(product_id).or_default();
        entry.0 += i64::from(*rating);
        entry.1 += 1;
    }

    for (product_id, (sum, count)) in grouped {
        let summary = summaries
            .entry(product_id.clone())
            .or_insert_with(|| ReviewSummary::empty(product_id.clone()));
        summary.average_rating = sum as f64 / count as f64;
        summary.total_reviews = count;
    }

    summaries
}

/// Overlay live aggregates onto catalog products.
///
/// Zeroed summaries are applied too, so a product whose reviews were all
/// removed stops ranking on its shipped figures.
pub fn apply_summaries(
    products: &mut [Product],
    summaries: &HashMap<ProductId, ReviewSummary>,
) {
    for product in products.iter_mut() {
        if let Some(summary) = summaries.get(&product.id) {
            product.rating = summary.average_rating;
            product.review_count = summary.total_reviews;
        }
    }
}
