//! Autocomplete suggestions.

use super::facets::distinct;
use crate::catalog::Product;

/// Queries shorter than this (after trimming) yield no suggestions.
const MIN_QUERY_CHARS: usize = 2;

const MAX_PRODUCT_SUGGESTIONS: usize = 5;
const MAX_CATEGORY_SUGGESTIONS: usize = 3;
const MAX_STYLE_SUGGESTIONS: usize = 4;

/// Suggestion buckets for a partial query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSuggestions {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    pub styles: Vec<String>,
}

/// Suggest products, categories, and styles for a partial query.
///
/// Matching is plain case-insensitive substring containment, not the
/// fuzzy cascade: the dropdown only offers text the typed fragment
/// actually appears in.
pub fn search_suggestions(query: &str, products: &[Product]) -> SearchSuggestions {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < MIN_QUERY_CHARS {
        return SearchSuggestions::default();
    }

    let product_hits = products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&needle)
                || product.category.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
                || product
                    .styles
                    .iter()
                    .any(|style| style.to_lowercase().contains(&needle))
        })
        .take(MAX_PRODUCT_SUGGESTIONS)
        .cloned()
        .collect();

    let categories = distinct(products.iter().map(|p| p.category.clone()))
        .into_iter()
        .filter(|category| category.to_lowercase().contains(&needle))
        .take(MAX_CATEGORY_SUGGESTIONS)
        .collect();

    let styles = distinct(products.iter().flat_map(|p| p.styles.iter().cloned()))
        .into_iter()
        .filter(|style| style.to_lowercase().contains(&needle))
        .take(MAX_STYLE_SUGGESTIONS)
        .collect();

    SearchSuggestions {
        products: product_hits,
        categories,
        styles,
    }
}
