//! Weighted fuzzy product search.

use super::similarity::similarity;
use crate::catalog::Product;

/// Minimum similarity for a term/field pair to count as relevant.
const RELEVANCE_THRESHOLD: f64 = 0.3;

const NAME_WEIGHT: f64 = 3.0;
const CATEGORY_WEIGHT: f64 = 2.0;
const DESCRIPTION_WEIGHT: f64 = 1.0;
const STYLE_WEIGHT: f64 = 2.0;
const ROOM_WEIGHT: f64 = 1.5;

/// Rank and narrow a product collection against a free-text query.
///
/// The query is split on whitespace; every term is scored against every
/// weighted field, and scores at or above the relevance threshold
/// accumulate. Products with no relevant pair at all are dropped; the
/// rest come back ordered by score, highest first, with ties keeping
/// their catalog order. A blank query returns the collection unchanged.
pub fn search_products(query: &str, products: &[Product]) -> Vec<Product> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return products.to_vec();
    }

    let needle = trimmed.to_lowercase();
    let terms: Vec<&str> = needle.split_whitespace().collect();

    let mut scored: Vec<(f64, Product)> = Vec::new();
    for product in products {
        let style_text = product.styles.join(" ");
        let fields = [
            (product.name.as_str(), NAME_WEIGHT),
            (product.category.as_str(), CATEGORY_WEIGHT),
            (product.description.as_str(), DESCRIPTION_WEIGHT),
            (style_text.as_str(), STYLE_WEIGHT),
            (product.room.as_str(), ROOM_WEIGHT),
        ];

        let mut score = 0.0;
        let mut matches = 0u32;
        for term in &terms {
            for (field, weight) in &fields {
                let s = similarity(field, term);
                if s >= RELEVANCE_THRESHOLD {
                    score += s * weight;
                    matches += 1;
                }
            }
        }

        if matches > 0 {
            scored.push((score, product.clone()));
        }
    }

    // sort_by is stable, so equal scores keep catalog order.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, product)| product).collect()
}

/// Result counts for the search header.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStats {
    /// Size of the full catalog.
    pub total: usize,
    /// Results surviving search and filters.
    pub filtered: usize,
    /// The trimmed query, `None` when blank.
    pub query: Option<String>,
}

/// Summarize a search outcome for display.
pub fn search_stats(query: &str, total: usize, filtered: usize) -> SearchStats {
    let trimmed = query.trim();
    SearchStats {
        total,
        filtered,
        query: if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str, name: &str) -> Product {
        Product::new(id, name, Money::new(1000, Currency::INR))
            .with_category("Body Care")
            .with_room("Bath & Body")
            .with_styles(["Natural"])
            .with_description("A gentle daily staple.")
    }

    #[test]
    fn test_blank_query_returns_collection_unchanged() {
        let catalog = vec![product("1", "Body Butter"), product("2", "Face Serum")];
        let results = search_products("   ", &catalog);
        assert_eq!(results, catalog);
    }

    #[test]
    fn test_no_relevant_field_yields_no_results() {
        let catalog = vec![product("1", "Body Butter"), product("2", "Face Serum")];
        assert!(search_products("zzzzzz", &catalog).is_empty());
    }

    #[test]
    fn test_name_match_outranks_description_match() {
        let by_name = product("1", "Rose Face Mist");
        let by_description =
            product("2", "Hydrating Toner").with_description("Infused with rose water.");
        let catalog = vec![by_description, by_name];

        let results = search_products("rose", &catalog);
        assert_eq!(results[0].id.as_str(), "1");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![product("1", "Calm Balm"), product("2", "Calm Balm")];
        let results = search_products("calm balm", &catalog);
        assert_eq!(results[0].id.as_str(), "1");
        assert_eq!(results[1].id.as_str(), "2");
    }

    #[test]
    fn test_multi_term_queries_accumulate() {
        let both_terms = product("1", "Herbal Shampoo");
        let one_term = product("2", "Herbal Face Pack");
        let catalog = vec![one_term, both_terms];

        let results = search_products("herbal shampoo", &catalog);
        assert_eq!(results[0].id.as_str(), "1");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = vec![product("1", "Vitamin C Serum")];
        let results = search_products("VITAMIN", &catalog);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_style_and_room_fields_match() {
        let catalog = vec![product("1", "Body Butter")];
        assert_eq!(search_products("natural", &catalog).len(), 1);
        assert_eq!(search_products("bath", &catalog).len(), 1);
    }

    #[test]
    fn test_search_stats() {
        let stats = search_stats("  rose  ", 12, 3);
        assert_eq!(stats.total, 12);
        assert_eq!(stats.filtered, 3);
        assert_eq!(stats.query.as_deref(), Some("rose"));

        let blank = search_stats("   ", 12, 12);
        assert_eq!(blank.query, None);
    }
}
