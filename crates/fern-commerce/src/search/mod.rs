//! Search & filter module.
//!
//! Fuzzy ranked search, autocomplete suggestions, HTML-safe highlight
//! markup, and the faceted filter model.

mod facets;
mod filter;
mod highlight;
mod ranked;
mod similarity;
mod suggest;

pub use facets::SearchFacets;
pub use filter::{sort_products, Availability, FilterSet, SortOption};
pub use highlight::highlight_match;
pub use ranked::{search_products, search_stats, SearchStats};
pub use similarity::similarity;
pub use suggest::{search_suggestions, SearchSuggestions};
